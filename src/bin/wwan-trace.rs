use std::{
    env,
    error::Error,
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    process::ExitCode,
};

use wwan_trace::{DecoderConfig, TraceDecoder};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let (capture, config) = match args.as_slice() {
        [_, capture] => (capture, None),
        [_, capture, config] => (capture, Some(config)),
        _ => {
            eprintln!("usage: wwan-trace <capture> [config.ini]");
            return ExitCode::from(2);
        }
    };

    match run(capture, config.map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("wwan-trace: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(capture: &str, config: Option<&str>) -> Result<(), Box<dyn Error>> {
    let config = match config {
        Some(path) => DecoderConfig::load(path)?,
        None => DecoderConfig::default(),
    };

    simplelog::TermLogger::init(
        config.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let input = BufReader::new(File::open(capture)?);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    TraceDecoder::new(config).run(input, &mut out)?;
    out.flush()?;

    Ok(())
}
