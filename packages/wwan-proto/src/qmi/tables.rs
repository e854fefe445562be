// Generated by tools/gen_qmi_tables.py from the QMI entity database. Do not edit.

use super::names::{CommandEntry, ServiceEntry};

pub(crate) static SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        id: 0,
        name: "ctl",
        commands: &[
            CommandEntry {
                id: 32,
                name: "SET_INSTANCE_ID",
                request: &[(1, "CTL/Set Instance ID Request/Instance")],
                response: &[(1, "CTL/Set Instance ID Response/Link"), (2, "CTL/Set Instance ID Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 33,
                name: "GET_VERSION_INFO",
                request: &[],
                response: &[(1, "CTL/Get Version Info Response/List"), (2, "CTL/Get Version Info Response/Result Code"), (16, "CTL/Get Version Info Response/Addendum")],
                indication: &[],
            },
            CommandEntry {
                id: 34,
                name: "GET_CLIENT_ID",
                request: &[(1, "CTL/Get Client ID Request/Type")],
                response: &[(1, "CTL/Get Client ID Response/ID"), (2, "CTL/Get Client ID Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 35,
                name: "RELEASE_CLIENT_ID",
                request: &[(1, "CTL/Release Client ID Request/ID")],
                response: &[(1, "CTL/Release Client ID Response/ID"), (2, "CTL/Release Client ID Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 36,
                name: "REVOKE_CLIENT_ID_IND",
                request: &[],
                response: &[],
                indication: &[(1, "CTL/Release Client ID Indication/ID")],
            },
            CommandEntry {
                id: 37,
                name: "INVALID_CLIENT_ID",
                request: &[],
                response: &[],
                indication: &[(1, "CTL/Invalid Client ID Indication/ID")],
            },
            CommandEntry {
                id: 38,
                name: "SET_DATA_FORMAT",
                request: &[(1, "CTL/Set Data Format Request/Format"), (16, "CTL/Set Data Format Request/Protocol")],
                response: &[(2, "CTL/Set Data Format Response/Result Code"), (16, "CTL/Set Data Format Response/Protocol")],
                indication: &[],
            },
            CommandEntry {
                id: 39,
                name: "SYNC",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 40,
                name: "SET_EVENT",
                request: &[(1, "CTL/Set Event Report Request/Report")],
                response: &[(2, "CTL/Set Event Report Response/Result Code")],
                indication: &[(1, "CTL/Event Report Indication/Report")],
            },
            CommandEntry {
                id: 41,
                name: "SET_POWER_SAVE_CFG",
                request: &[(1, "CTL/Set Power Save Config Request/Descriptor"), (17, "CTL/Set Power Save Config Request/Permitted Set")],
                response: &[(2, "CTL/Set Power Save Config Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 42,
                name: "SET_POWER_SAVE_MODE",
                request: &[(1, "CTL/Set Power Save Mode Request/Mode")],
                response: &[(2, "CTL/Set Power Save Mode Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 43,
                name: "GET_POWER_SAVE_MODE",
                request: &[],
                response: &[(1, "CTL/Get Power Save Mode Response/Mode"), (2, "CTL/Get Power Save Mode Response/Result Code")],
                indication: &[],
            },
        ],
    },
    ServiceEntry {
        id: 1,
        name: "wds",
        commands: &[
            CommandEntry {
                id: 0,
                name: "RESET",
                request: &[],
                response: &[(2, "WDS/Reset Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 1,
                name: "SET_EVENT",
                request: &[(16, "WDS/Set Event Report Request/Channel Rate Indicator"), (17, "WDS/Set Event Report Request/Transfer Statistics Indicator"), (18, "WDS/Set Event Report Request/Data Bearer Technology Indicator"), (19, "WDS/Set Event Report Request/Dormancy Status Indicator"), (20, "WDS/Set Event Report Request/MIP Status Indicator"), (21, "WDS/Set Event Report Request/Current Data Bearer Technology Indicator")],
                response: &[(2, "WDS/Set Event Report Response/Result Code")],
                indication: &[(16, "WDS/Event Report/TX Packet Successes"), (17, "WDS/Event Report/RX Packet Successes"), (18, "WDS/Event Report/TX Packet Errors"), (19, "WDS/Event Report/RX Packet Errors"), (20, "WDS/Event Report/TX Overflows"), (21, "WDS/Event Report/RX Overflows"), (22, "WDS/Event Report/Channel Rates"), (23, "WDS/Event Report/Data Bearer Technology"), (24, "WDS/Event Report/Dormancy Status"), (25, "WDS/Event Report/TX Bytes"), (26, "WDS/Event Report/RX Bytes"), (27, "WDS/Event Report/MIP Status"), (29, "WDS/Event Report/Current Data Bearer Technology")],
            },
            CommandEntry {
                id: 2,
                name: "ABORT",
                request: &[(1, "WDS/Abort Request/Transaction ID")],
                response: &[(2, "WDS/Abort Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 32,
                name: "START_NET",
                request: &[(16, "WDS/Start Network Interface Request/Primary DNS"), (17, "WDS/Start Network Interface Request/Secondary DNS"), (18, "WDS/Start Network Interface Request/Primary NBNS"), (19, "WDS/Start Network Interface Request/Secondary NBNS"), (20, "WDS/Start Network Interface Request/Context APN Name"), (21, "WDS/Start Network Interface Request/IP Address"), (22, "WDS/Start Network Interface Request/Authentication"), (23, "WDS/Start Network Interface Request/Username"), (24, "WDS/Start Network Interface Request/Password"), (25, "WDS/Start Network Interface Request/IP Family"), (48, "WDS/Start Network Interface Request/Technology Preference"), (49, "WDS/Start Network Interface Request/3GPP Profile Identifier"), (50, "WDS/Start Network Interface Request/3GPP2 Profile Identifier"), (51, "WDS/Start Network Interface Request/Autoconnect"), (52, "WDS/Start Network Interface Request/Extended Technology Preference"), (53, "WDS/Start Network Interface Request/Call Type")],
                response: &[(1, "WDS/Start Network Interface Response/Packet Data Handle"), (2, "WDS/Start Network Interface Response/Result Code"), (16, "WDS/Start Network Interface Response/Call End Reason"), (17, "WDS/Start Network Interface Response/Verbose Call End Reason")],
                indication: &[],
            },
            CommandEntry {
                id: 33,
                name: "STOP_NET",
                request: &[(1, "WDS/Stop Network Interface Request/Packet Data Handle"), (16, "WDS/Stop Network Interface Request/Autoconnect")],
                response: &[(2, "WDS/Stop Network Interface Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 34,
                name: "GET_PKT_STATUS",
                request: &[],
                response: &[(1, "WDS/Get Packet Service Status Response/Status"), (2, "WDS/Get Packet Service Status Response/Result Code")],
                indication: &[(1, "WDS/Packet Service Status Report/Status"), (16, "WDS/Packet Service Status Report/Call End Reason"), (17, "WDS/Packet Service Status Report/Verbose Call End Reason")],
            },
            CommandEntry {
                id: 35,
                name: "GET_RATES",
                request: &[],
                response: &[(1, "WDS/Get Channel Rates Response/Channel Rates"), (2, "WDS/Get Channel Rates Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 36,
                name: "GET_STATISTICS",
                request: &[(1, "WDS/Get Packet Statistics Request/Packet Stats Mask")],
                response: &[(2, "WDS/Get Packet Statistics Response/Result Code"), (16, "WDS/Get Packet Statistics Response/TX Packet Successes"), (17, "WDS/Get Packet Statistics Response/RX Packet Successes"), (18, "WDS/Get Packet Statistics Response/TX Packet Errors"), (19, "WDS/Get Packet Statistics Response/RX Packet Errors"), (20, "WDS/Get Packet Statistics Response/TX Overflows"), (21, "WDS/Get Packet Statistics Response/RX Overflows"), (25, "WDS/Get Packet Statistics Response/TX Bytes"), (26, "WDS/Get Packet Statistics Response/RX Bytes"), (27, "WDS/Get Packet Statistics Response/Previous TX Bytes"), (28, "WDS/Get Packet Statistics Response/Previous RX Bytes")],
                indication: &[],
            },
            CommandEntry {
                id: 37,
                name: "G0_DORMANT",
                request: &[],
                response: &[(2, "WDS/Go Dormant Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 38,
                name: "G0_ACTIVE",
                request: &[],
                response: &[(2, "WDS/Go Active Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 39,
                name: "CREATE_PROFILE",
                request: &[(1, "WDS/Create Profile Request/Profile Type"), (16, "WDS/Create Profile Request/Profile Name"), (17, "WDS/Create Profile Request/PDP Type"), (20, "WDS/Create Profile Request/APN Name"), (21, "WDS/Create Profile Request/Primary DNS"), (22, "WDS/Create Profile Request/Secondary DNS"), (23, "WDS/Create Profile Request/UMTS Requested QoS"), (24, "WDS/Create Profile Request/UMTS Minimum QoS"), (25, "WDS/Create Profile Request/GPRS Requested QoS"), (26, "WDS/Create Profile Request/GPRS Minimum QoS"), (27, "WDS/Create Profile Request/Username"), (28, "WDS/Create Profile Request/Password"), (29, "WDS/Create Profile Request/Authentication"), (30, "WDS/Create Profile Request/IP Address"), (31, "WDS/Create Profile Request/P-CSCF")],
                response: &[(1, "WDS/Create Profile Response/Profile Identifier"), (2, "WDS/Create Profile Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 40,
                name: "MODIFY_PROFILE",
                request: &[(1, "WDS/Modify Profile Request/Profile Identifier"), (16, "WDS/Modify Profile Request/Profile Name"), (17, "WDS/Modify Profile Request/PDP Type"), (20, "WDS/Modify Profile Request/APN Name"), (21, "WDS/Modify Profile Request/Primary DNS"), (22, "WDS/Modify Profile Request/Secondary DNS"), (23, "WDS/Modify Profile Request/UMTS Requested QoS"), (24, "WDS/Modify Profile Request/UMTS Minimum QoS"), (25, "WDS/Modify Profile Request/GPRS Requested QoS"), (26, "WDS/Modify Profile Request/GPRS Minimum QoS"), (27, "WDS/Modify Profile Request/Username"), (28, "WDS/Modify Profile Request/Password"), (29, "WDS/Modify Profile Request/Authentication"), (30, "WDS/Modify Profile Request/IP Address"), (31, "WDS/Modify Profile Request/P-CSCF"), (32, "WDS/Modify Profile Request/PDP Access Control Flag"), (33, "WDS/Modify Profile Request/P-CSCF Address Using DHCP"), (34, "WDS/Modify Profile Request/IM CN Flag"), (35, "WDS/Modify Profile Request/Traffic Flow Template ID1 Parameters"), (36, "WDS/Modify Profile Request/Traffic Flow Template ID2 Parameters"), (37, "WDS/Modify Profile Request/PDP Context Number"), (38, "WDS/Modify Profile Request/PDP Context Secondary Flag"), (39, "WDS/Modify Profile Request/PDP Context Primary ID"), (40, "WDS/Modify Profile Request/IPv6 Address"), (41, "WDS/Modify Profile Request/Requested QoS"), (42, "WDS/Modify Profile Request/Minimum QoS"), (43, "WDS/Modify Profile Request/Primary IPv6"), (44, "WDS/Modify Profile Request/Secondary IPv6"), (45, "WDS/Modify Profile Request/Address Allocation Preference"), (46, "WDS/Modify Profile Request/LTE QoS Parameters"), (144, "WDS/Modify Profile Request/Negotiate DNS Server Prefrence"), (145, "WDS/Modify Profile Request/PPP Session Close Timer DO"), (146, "WDS/Modify Profile Request/PPP Session Close Timer 1X"), (147, "WDS/Modify Profile Request/Allow Linger"), (148, "WDS/Modify Profile Request/LCP ACK Timeout"), (149, "WDS/Modify Profile Request/IPCP ACK Timeout"), (150, "WDS/Modify Profile Request/Authentication Timeout"), (154, "WDS/Modify Profile Request/Authentication Protocol"), (155, "WDS/Modify Profile Request/User ID"), (156, "WDS/Modify Profile Request/Authentication Password"), (157, "WDS/Modify Profile Request/Data Rate"), (158, "WDS/Modify Profile Request/Application Type"), (159, "WDS/Modify Profile Request/Data Mode"), (160, "WDS/Modify Profile Request/Application Priority"), (161, "WDS/Modify Profile Request/APN String"), (162, "WDS/Modify Profile Request/PDN Type"), (163, "WDS/Modify Profile Request/P-CSCF Address Needed"), (164, "WDS/Modify Profile Request/Primary IPv4 Address"), (165, "WDS/Modify Profile Request/Secondary IPv4 Address"), (166, "WDS/Modify Profile Request/Primary IPv6 Address"), (167, "WDS/Modify Profile Request/Secondary IPv6 Address")],
                response: &[(2, "WDS/Modify Profile Response/Result Code"), (151, "WDS/Modify Profile Request/LCP Config Retry Count"), (152, "WDS/Modify Profile Request/IPCP Config Retry Count"), (153, "WDS/Modify Profile Request/Authentication Retry"), (224, "WDS/Modify Profile Request/Extended Error Code")],
                indication: &[],
            },
            CommandEntry {
                id: 41,
                name: "DELETE_PROFILE",
                request: &[(1, "WDS/Delete Profile Request/Profile Identifier")],
                response: &[(2, "WDS/Delete Profile Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 42,
                name: "GET_PROFILE_LIST",
                request: &[],
                response: &[(1, "WDS/Get Profile List Response/Profile List"), (2, "WDS/Get Profile List Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 43,
                name: "GET_PROFILE",
                request: &[(1, "WDS/Get Profile Settings Request/Profile Identifier")],
                response: &[(2, "WDS/Get Profile Settings Response/Result Code"), (16, "WDS/Get Profile Settings Response/Profile Name"), (17, "WDS/Get Profile Settings Response/PDP Type"), (20, "WDS/Get Profile Settings Response/APN Name"), (21, "WDS/Get Profile Settings Response/Primary DNS"), (22, "WDS/Get Profile Settings Response/Secondary DNS"), (23, "WDS/Get Profile Settings Response/UMTS Requested QoS"), (24, "WDS/Get Profile Settings Response/UMTS Minimum QoS"), (25, "WDS/Get Profile Settings Response/GPRS Requested QoS"), (26, "WDS/Get Profile Settings Response/GPRS Minimum QoS"), (27, "WDS/Get Profile Settings Response/Username"), (29, "WDS/Get Profile Settings Response/Authentication"), (30, "WDS/Get Profile Settings Response/IP Address"), (31, "WDS/Get Profile Settings Response/P-CSCF")],
                indication: &[],
            },
            CommandEntry {
                id: 44,
                name: "GET_DEFAULTS",
                request: &[(1, "WDS/Get Default Settings Request/Profile Type")],
                response: &[(2, "WDS/Get Default Settings Response/Result Code"), (16, "WDS/Get Default Settings Response/Profile Name"), (17, "WDS/Get Default Settings Response/PDP Type"), (20, "WDS/Get Default Settings Response/APN Name"), (21, "WDS/Get Default Settings Response/Primary DNS"), (22, "WDS/Get Default Settings Response/Secondary DNS"), (23, "WDS/Get Default Settings Response/UMTS Requested QoS"), (24, "WDS/Get Default Settings Response/UMTS Minimum QoS"), (25, "WDS/Get Default Settings Response/GPRS Requested QoS"), (26, "WDS/Get Default Settings Response/GPRS Minimum QoS"), (27, "WDS/Get Default Settings Response/Username"), (28, "WDS/Get Default Settings Response/Password"), (29, "WDS/Get Default Settings Response/Authentication"), (30, "WDS/Get Default Settings Response/IP Address"), (31, "WDS/Get Default Settings Response/P-CSCF"), (32, "WDS/Get Default Settings Response/PDP Access Control Flag"), (33, "WDS/Get Default Settings Response/P-CSCF Address Using DHCP"), (34, "WDS/Get Default Settings Response/IM CN Flag"), (35, "WDS/Get Default Settings Response/Traffic Flow Template ID1 Parameters"), (36, "WDS/Get Default Settings Response/Traffic Flow Template ID2 Parameters"), (37, "WDS/Get Default Settings Response/PDP Context Number"), (38, "WDS/Get Default Settings Response/PDP Context Secondary Flag"), (39, "WDS/Get Default Settings Response/PDP Context Primary ID"), (40, "WDS/Get Default Settings Response/IPv6 Address"), (41, "WDS/Get Default Settings Response/Requested QoS"), (42, "WDS/Get Default Settings Response/Minimum QoS"), (43, "WDS/Get Default Settings Response/Primary DNS IPv6 Address"), (44, "WDS/Get Default Settings Response/Secondary DNS IPv6 Address"), (45, "WDS/Get Default Settings Response/DHCP NAS Preference"), (46, "WDS/Get Default Settings Response/LTE QoS Parameters"), (144, "WDS/Get Default Settings Response/Negotiate DSN Server Preferences"), (145, "WDS/Get Default Settings Response/PPP Session CLose Timer DO"), (146, "WDS/Get Default Settings Response/PPP Session Close Timer 1X"), (147, "WDS/Get Default Settings Response/Allow Lingering Interface"), (148, "WDS/Get Default Settings Response/LCP ACK Timeout"), (149, "WDS/Get Default Settings Response/IPCP ACK Timeout"), (150, "WDS/Get Default Settings Response/Authentication Timeout"), (151, "WDS/Get Default Settings Response/LCP Config Retry Count"), (152, "WDS/Get Default Settings Response/IPCP Config Retry Count"), (153, "WDS/Get Default Settings Response/Authentication Retry"), (154, "WDS/Get Default Settings Response/Authentication Protocol"), (155, "WDS/Get Default Settings Response/User ID"), (156, "WDS/Get Default Settings Response/Authentication Password"), (157, "WDS/Get Default Settings Response/Data Rate"), (158, "WDS/Get Default Settings Response/Application Type"), (159, "WDS/Get Default Settings Response/Data Mode"), (160, "WDS/Get Default Settings Response/Application Priority"), (161, "WDS/Get Default Settings Response/APN String"), (162, "WDS/Get Default Settings Response/PDN Type"), (163, "WDS/Get Default Settings Response/P-CSCF Address Needed"), (164, "WDS/Get Default Settings Response/Primary DNS Address"), (165, "WDS/Get Default Settings Response/Secondary DNS Address"), (166, "WDS/Get Default Settings Response/Primary IPv6 Address"), (167, "WDS/Get Default Settings Response/Secondary IPv6 Address"), (224, "WDS/Get Default Settings Response/Extended Error Code")],
                indication: &[],
            },
            CommandEntry {
                id: 45,
                name: "GET_SETTINGS",
                request: &[(16, "WDS/Get Current Settings Request/Requested Settings")],
                response: &[(2, "WDS/Get Current Settings Response/Result Code"), (16, "WDS/Get Current Settings Response/Profile Name"), (17, "WDS/Get Current Settings Response/PDP Type"), (20, "WDS/Get Current Settings Response/APN Name"), (21, "WDS/Get Current Settings Response/Primary DNS"), (22, "WDS/Get Current Settings Response/Secondary DNS"), (23, "WDS/Get Current Settings Response/UMTS Granted QoS"), (25, "WDS/Get Current Settings Response/GPRS Granted QoS"), (27, "WDS/Get Current Settings Response/Username"), (29, "WDS/Get Current Settings Response/Authentication"), (30, "WDS/Get Current Settings Response/IP Address"), (31, "WDS/Get Current Settings Response/Profile ID"), (32, "WDS/Get Current Settings Response/Gateway Address"), (33, "WDS/Get Current Settings Response/Gateway Subnet Mask"), (34, "WDS/Get Current Settings Response/P-CSCF"), (35, "WDS/Get Current Settings Response/P-CSCF Server Address List"), (36, "WDS/Get Current Settings Response/P-CSCF Domain Name List"), (37, "WDS/Get Current Settings Response/IPv6 Address"), (38, "WDS/Get Current Settings Response/IPv6 Gateway Address"), (39, "WDS/Get Current Settings Response/Primary IPv6 DNS"), (40, "WDS/Get Current Settings Response/Secondary IPv6 DNS"), (41, "WDS/Get Current Settings Response/MTU"), (42, "WDS/Get Current Settings Response/Domain Name List"), (43, "WDS/Get Current Settings Response/IP Family"), (44, "WDS/Get Current Settings Response/IM CN Flag"), (45, "WDS/Get Current Settings Response/Extended Technology"), (46, "WDS/Get Current Settings Response/P-CSCF IPv6 Address List")],
                indication: &[],
            },
            CommandEntry {
                id: 46,
                name: "SET_MIP",
                request: &[(1, "WDS/Set MIP Mode Request/Mobile IP Mode")],
                response: &[(2, "WDS/Set MIP Mode Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 47,
                name: "GET_MIP",
                request: &[],
                response: &[(1, "WDS/Get MIP Mode Response/Mobile IP Mode"), (2, "WDS/Get MIP Mode Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 48,
                name: "GET_DORMANCY",
                request: &[],
                response: &[(1, "WDS/Get Dormancy Response/Dormancy Status"), (2, "WDS/Get Dormancy Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 52,
                name: "GET_AUTOCONNECT",
                request: &[],
                response: &[(1, "WDS/Get Autoconnect Setting Response/Autoconnect"), (2, "WDS/Get Autoconnect Setting Response/Result Code"), (16, "WDS/Get Autoconnect Setting Response/Roam")],
                indication: &[],
            },
            CommandEntry {
                id: 53,
                name: "GET_DURATION",
                request: &[],
                response: &[(1, "WDS/Get Data Session Duration Response/Duration"), (2, "WDS/Get Data Session Duration Response/Result Code"), (16, "WDS/Get Data Session Duration Response/Previous Duration"), (17, "WDS/Get Data Session Duration Response/Active Duration"), (18, "WDS/Get Data Session Duration Response/Previous Active Duration")],
                indication: &[],
            },
            CommandEntry {
                id: 54,
                name: "GET_MODEM_STATUS",
                request: &[],
                response: &[(1, "WDS/Get Modem Status Response/Status"), (2, "WDS/Get Modem Status Response/Result Code"), (16, "WDS/Get Modem Status Response/Call End Reason")],
                indication: &[(1, "WDS/Modem Status Report/Status"), (16, "WDS/Modem Status Report/Call End Reason")],
            },
            CommandEntry {
                id: 55,
                name: "GET_DATA_BEARER",
                request: &[],
                response: &[(1, "WDS/Get Data Bearer Technology Response/Technology"), (2, "WDS/Get Data Bearer Technology Response/Result Code"), (16, "WDS/Get Data Bearer Technology Response/Last Call Technology")],
                indication: &[],
            },
            CommandEntry {
                id: 56,
                name: "GET_MODEM_INFO",
                request: &[(1, "WDS/Get Modem Info Request/Requested Status"), (16, "WDS/Get Modem Info Request/Connection Status Indicator"), (17, "WDS/Get Modem Info Request/Transfer Statistics Indicator"), (18, "WDS/Get Modem Info Request/Dormancy Status Indicator"), (19, "WDS/Get Modem Info Request/Data Bearer Technology Indicator"), (20, "WDS/Get Modem Info Request/Channel Rate Indicator")],
                response: &[(2, "WDS/Get Modem Info Response/Result Code"), (16, "WDS/Get Modem Info Response/Status"), (17, "WDS/Get Modem Info Response/Call End Reason"), (18, "WDS/Get Modem Info Response/TX Bytes"), (19, "WDS/Get Modem Info Response/RX Bytes"), (20, "WDS/Get Modem Info Response/Dormancy Status"), (21, "WDS/Get Modem Info Response/Technology"), (22, "WDS/Get Modem Info Response/Rates"), (23, "WDS/Get Modem Info Response/Previous TX Bytes"), (24, "WDS/Get Modem Info Response/Previous RX Bytes"), (25, "WDS/Get Modem Info Duration Response/Active Duration")],
                indication: &[(16, "WDS/Modem Info Report/Status"), (17, "WDS/Modem Info Report/Call End Reason"), (18, "WDS/Modem Info Report/TX Bytes"), (19, "WDS/Modem Info Report/RX Bytes"), (20, "WDS/Modem Info Report/Dormancy Status"), (21, "WDS/Modem Info Report/Technology"), (22, "WDS/Modem Info Report/Rates")],
            },
            CommandEntry {
                id: 60,
                name: "GET_ACTIVE_MIP",
                request: &[],
                response: &[(1, "WDS/Get Active MIP Profile Response/Index"), (2, "WDS/Get Active MIP Profile Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 61,
                name: "SET_ACTIVE_MIP",
                request: &[(1, "WDS/Set Active MIP Profile Request/Index")],
                response: &[(2, "WDS/Set Active MIP Profile Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 62,
                name: "GET_MIP_PROFILE",
                request: &[(1, "WDS/Get MIP Profile Request/Index")],
                response: &[(2, "WDS/Get MIP Profile Response/Result Code"), (16, "WDS/Get MIP Profile Response/State"), (17, "WDS/Get MIP Profile Response/Home Address"), (18, "WDS/Get MIP Profile Response/Primary Home Agent Address"), (19, "WDS/Get MIP Profile Response/Secondary Home Agent Address"), (20, "WDS/Get MIP Profile Response/Reverse Tunneling"), (21, "WDS/Get MIP Profile Response/NAI"), (22, "WDS/Get MIP Profile Response/HA SPI"), (23, "WDS/Get MIP Profile Response/AAA SPI"), (26, "WDS/Get MIP Profile Response/HA State"), (27, "WDS/Get MIP Profile Response/AAA State")],
                indication: &[],
            },
            CommandEntry {
                id: 63,
                name: "SET_MIP_PROFILE",
                request: &[(1, "WDS/Set MIP Profile Request/Index"), (16, "WDS/Set MIP Profile Request/State"), (17, "WDS/Set MIP Profile Request/Home Address"), (18, "WDS/Set MIP Profile Request/Primary Home Agent Address"), (19, "WDS/Set MIP Profile Request/Secondary Home Agent Address"), (20, "WDS/Set MIP Profile Request/Reverse Tunneling"), (21, "WDS/Set MIP Profile Request/NAI"), (22, "WDS/Set MIP Profile Request/HA SPI"), (23, "WDS/Set MIP Profile Requeste/AAA SPI"), (24, "WDS/Set MIP Profile Request/MN-HA"), (25, "WDS/Set MIP Profile Request/MN-AAA")],
                response: &[(2, "WDS/Set MIP Profile Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 64,
                name: "GET_MIP_PARAMS",
                request: &[],
                response: &[(2, "WDS/Get MIP Parameters Response/Result Code"), (16, "WDS/Get MIP Parameters Response/Mobile IP Mode"), (17, "WDS/Get MIP Parameters Response/Retry Attempt Limit"), (18, "WDS/Get MIP Parameters Response/Retry Attempt Interval"), (19, "WDS/Get MIP Parameters Response/Re-Registration Period"), (20, "WDS/Get MIP Parameters Response/Re-Registration Only With Traffic"), (21, "WDS/Get MIP Parameters Response/MN-HA Authenticator Calculator"), (22, "WDS/Get MIP Parameters Response/MN-HA RFC 2002 BIS Authentication")],
                indication: &[],
            },
            CommandEntry {
                id: 65,
                name: "SET_MIP_PARAMS",
                request: &[(1, "WDS/Set MIP Parameters Request/SPC"), (16, "WDS/Set MIP Parameters Request/Mobile IP Mode"), (17, "WDS/Set MIP Parameters Request/Retry Attempt Limit"), (18, "WDS/Set MIP Parameters Request/Retry Attempt Interval"), (19, "WDS/Set MIP Parameters Request/Re-Registration Period"), (20, "WDS/Set MIP Parameters Request/Re-Registration Only With Traffic"), (21, "WDS/Set MIP Parameters Request/MN-HA Authenticator Calculator"), (22, "WDS/Set MIP Parameters Request/MN-HA RFC 2002 BIS Authentication")],
                response: &[(2, "WDS/Set MIP Parameters Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 66,
                name: "GET_LAST_MIP_STATUS",
                request: &[],
                response: &[(1, "WDS/Get Last MIP Status Response/Status"), (2, "WDS/Get Last MIP Status Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 67,
                name: "GET_AAA_AUTH_STATUS",
                request: &[],
                response: &[(1, "WDS/Get AN-AAA Authentication Status Response/Status"), (2, "WDS/Get AN-AAA Authentication Status Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 68,
                name: "GET_CUR_DATA_BEARER",
                request: &[],
                response: &[(1, "WDS/Get Current Data Bearer Technology Response/Technology"), (2, "WDS/Get Current Data Bearer Technology Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 69,
                name: "GET_CALL_LIST",
                request: &[(16, "WDS/Get Call List Request/List Type")],
                response: &[(2, "WDS/Get Call List Response/Result Code"), (16, "WDS/Get Call List Response/Full List"), (17, "WDS/Get Call List Response/ID List")],
                indication: &[],
            },
            CommandEntry {
                id: 70,
                name: "GET_CALL_ENTRY",
                request: &[(1, "WDS/Get Call Record Request/Record ID")],
                response: &[(1, "WDS/Get Call Record Response/Record"), (2, "WDS/Get Call Record Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 71,
                name: "CLEAR_CALL_LIST",
                request: &[],
                response: &[(2, "WDS/Clear Call List Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 72,
                name: "GET_CALL_LIST_MAX",
                request: &[],
                response: &[(1, "WDS/Get Call List Max Size Response/Maximum"), (2, "WDS/Get Call List Max Size Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 77,
                name: "SET_IP_FAMILY",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 81,
                name: "SET_AUTOCONNECT",
                request: &[(1, "WDS/Set Autoconnect Setting Request/Autoconnect"), (16, "WDS/Set Autoconnect Setting Request/Roam")],
                response: &[(2, "WDS/Set Autoconnect Setting Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 82,
                name: "GET_DNS",
                request: &[],
                response: &[(2, "WDS/Get DNS Setting Response/Result Code"), (16, "WDS/Get DNS Setting Response/Primary"), (17, "WDS/Get DNS Setting Response/Secondary"), (18, "WDS/Get DNS Setting Response/Primary IPv6"), (19, "WDS/Get DNS Setting Response/Secondary IPv6")],
                indication: &[],
            },
            CommandEntry {
                id: 83,
                name: "SET_DNS",
                request: &[(16, "WDS/Set DNS Setting Request/Primary"), (17, "WDS/Set DNS Setting Request/Secondary"), (18, "WDS/Set DNS Setting Request/Primary IPv6 Address"), (19, "WDS/Set DNS Setting Request/Secondary IPv6 Address")],
                response: &[(2, "WDS/Set DNS Setting Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 84,
                name: "GET_PRE_DORMANCY",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 85,
                name: "SET_CAM_TIMER",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 86,
                name: "GET_CAM_TIMER",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 87,
                name: "SET_SCRM",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 88,
                name: "GET_SCRM",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 89,
                name: "SET_RDUD",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 90,
                name: "GET_RDUD",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 91,
                name: "GET_SIPMIP_CALL_TYPE",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 92,
                name: "SET_PM_PERIOD",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 93,
                name: "SET_FORCE_LONG_SLEEP",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 94,
                name: "GET_PM_PERIOD",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 95,
                name: "GET_CALL_THROTTLE",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 96,
                name: "GET_NSAPI",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 97,
                name: "SET_DUN_CTRL_PREF",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 98,
                name: "GET_DUN_CTRL_INFO",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 99,
                name: "SET_DUN_CTRL_EVENT",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 100,
                name: "PENDING_DUN_CTRL",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 105,
                name: "GET_DATA_SYS",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 106,
                name: "GET_LAST_DATA_STATUS",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 107,
                name: "GET_CURR_DATA_SYS",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 108,
                name: "GET_PDN_THROTTLE",
                request: &[],
                response: &[],
                indication: &[],
            },
        ],
    },
    ServiceEntry {
        id: 2,
        name: "dms",
        commands: &[
            CommandEntry {
                id: 0,
                name: "RESET",
                request: &[],
                response: &[(2, "DMS/Reset Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 1,
                name: "SET_EVENT",
                request: &[(16, "DMS/Set Event Report Request/Power State"), (17, "DMS/Set Event Report Request/Battery Level"), (18, "DMS/Set Event Report Request/PIN Status"), (19, "DMS/Set Event Report Request/Activation State"), (20, "DMS/Set Event Report Request/Operating Mode"), (21, "DMS/Set Event Report Request/UIM State"), (22, "DMS/Set Event Report Request/Wireless Disable State")],
                response: &[(2, "DMS/Set Event Report Response/Result Code")],
                indication: &[(16, "DMS/Event Report/Power State"), (17, "DMS/Event Report/PIN1 State"), (18, "DMS/Event Report/PIN2 State"), (19, "DMS/Event Report/Activation State"), (20, "DMS/Event Report/Operating Mode"), (21, "DMS/Event Report/UIM State"), (22, "DMS/Event Report/Wireless Disable State")],
            },
            CommandEntry {
                id: 32,
                name: "GET_CAPS",
                request: &[],
                response: &[(1, "DMS/Get Device Capabilities Response/Capabilities"), (2, "DMS/Get Device Capabilities Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 33,
                name: "GET_MANUFACTURER",
                request: &[],
                response: &[(1, "DMS/Get Device Manfacturer Response/Manfacturer"), (2, "DMS/Get Device Manfacturer Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 34,
                name: "GET_MODEL_ID",
                request: &[],
                response: &[(1, "DMS/Get Device Model Response/Model"), (2, "DMS/Get Device Model Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 35,
                name: "GET_REV_ID",
                request: &[],
                response: &[(1, "DMS/Get Device Revision Response/Revision"), (2, "DMS/Get Device Revision Response/Result Code"), (16, "DMS/Get Device Revision Response/Boot Code Revision"), (17, "DMS/Get Device Revision Response/UQCN Revision")],
                indication: &[],
            },
            CommandEntry {
                id: 36,
                name: "GET_NUMBER",
                request: &[],
                response: &[(1, "DMS/Get Device Voice Number Response/Voice Number"), (2, "DMS/Get Device Voice Number Response/Result Code"), (16, "DMS/Get Device Voice Number Response/Mobile ID Number"), (17, "DMS/Get Device Voice Number Response/IMSI")],
                indication: &[],
            },
            CommandEntry {
                id: 37,
                name: "GET_IDS",
                request: &[],
                response: &[(2, "DMS/Get Device Serial Numbers Response/Result Code"), (16, "DMS/Get Device Serial Numbers Response/ESN"), (17, "DMS/Get Device Serial Numbers Response/IMEI"), (18, "DMS/Get Device Serial Numbers Response/MEID")],
                indication: &[],
            },
            CommandEntry {
                id: 38,
                name: "GET_POWER_STATE",
                request: &[],
                response: &[(1, "DMS/Get Power State Response/Power State"), (2, "DMS/Get Power State Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 39,
                name: "UIM_SET_PIN_PROT",
                request: &[(1, "DMS/UIM Set PIN Protection Request/Info")],
                response: &[(2, "DMS/UIM Set PIN Protection Response/Result Code"), (16, "DMS/UIM Set PIN Protection Response/Retry Info")],
                indication: &[],
            },
            CommandEntry {
                id: 40,
                name: "UIM_PIN_VERIFY",
                request: &[(1, "DMS/UIM Verify PIN Request/Info")],
                response: &[(2, "DMS/UIM Verify PIN Response/Result Code"), (16, "DMS/UIM Verify PIN Response/Retry Info")],
                indication: &[],
            },
            CommandEntry {
                id: 41,
                name: "UIM_PIN_UNBLOCK",
                request: &[(1, "DMS/UIM Unblock PIN Request/Info")],
                response: &[(2, "DMS/UIM Unblock PIN Response/Result Code"), (16, "DMS/UIM Unblock PIN Response/Retry Info")],
                indication: &[],
            },
            CommandEntry {
                id: 42,
                name: "UIM_PIN_CHANGE",
                request: &[(1, "DMS/UIM Change PIN Request/Info")],
                response: &[(2, "DMS/UIM Change PIN Response/Result Code"), (16, "DMS/UIM Change PIN Response/Retry Info")],
                indication: &[],
            },
            CommandEntry {
                id: 43,
                name: "UIM_GET_PIN_STATUS",
                request: &[],
                response: &[(2, "DMS/UIM Get PIN Status Response/Result Code"), (17, "DMS/UIM Get PIN Status Response/PIN1 Status"), (18, "DMS/UIM Get PIN Status Response/PIN2 Status")],
                indication: &[],
            },
            CommandEntry {
                id: 44,
                name: "GET_MSM_ID",
                request: &[],
                response: &[(1, "DMS/Get Hardware Revision Response/Hardware Revision"), (2, "DMS/Get Hardware Revision Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 45,
                name: "GET_OPERTAING_MODE",
                request: &[],
                response: &[(1, "DMS/Get Operating Mode Response/Operating Mode"), (2, "DMS/Get Operating Mode Response/Result Code"), (16, "DMS/Get Operating Mode Response/Offline Reason"), (17, "DMS/Get Operating Mode Response/Platform Restricted")],
                indication: &[],
            },
            CommandEntry {
                id: 46,
                name: "SET_OPERATING_MODE",
                request: &[(1, "DMS/Set Operating Mode Request/Operating Mode")],
                response: &[(2, "DMS/Set Operating Mode Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 47,
                name: "GET_TIME",
                request: &[],
                response: &[(1, "DMS/Get Timestamp Response/Timestamp"), (2, "DMS/Get Timestamp Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 48,
                name: "GET_PRL_VERSION",
                request: &[],
                response: &[(1, "DMS/Get PRL Version Response/PRL Version"), (2, "DMS/Get PRL Version Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 49,
                name: "GET_ACTIVATED_STATE",
                request: &[],
                response: &[(1, "DMS/Get Activation State Response/Activation State"), (2, "DMS/Get Activation State Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 50,
                name: "ACTIVATE_AUTOMATIC",
                request: &[(1, "DMS/Activate Automatic Request/Activation Code")],
                response: &[(2, "DMS/Activate Automatic Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 51,
                name: "ACTIVATE_MANUAL",
                request: &[(1, "DMS/Activate Manual Request/Activation Data"), (16, "DMS/Activate Manual Request/PRL (Obsolete)"), (17, "DMS/Activate Manual Request/MN-HA Key"), (18, "DMS/Activate Manual Request/MN-AAA Key"), (19, "DMS/Activate Manual Request/PRL")],
                response: &[(2, "DMS/Activate Manual Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 52,
                name: "GET_USER_LOCK_STATE",
                request: &[],
                response: &[(1, "DMS/Get Lock State Response/Lock State"), (2, "DMS/Get Lock State Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 53,
                name: "SET_USER_LOCK_STATE",
                request: &[(1, "DMS/Set Lock State Request/Lock State")],
                response: &[(2, "DMS/Set Lock State Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 54,
                name: "SET_USER_LOCK_CODE",
                request: &[(1, "DMS/Set Lock Code Request/Lock Code")],
                response: &[(2, "DMS/Set Lock Code Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 55,
                name: "READ_USER_DATA",
                request: &[],
                response: &[(1, "DMS/Read User Data Response/User Data"), (2, "DMS/Read User Data Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 56,
                name: "WRITE_USER_DATA",
                request: &[(1, "DMS/Write User Data Request/User Data")],
                response: &[(2, "DMS/Write User Data Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 57,
                name: "READ_ERI_FILE",
                request: &[],
                response: &[(1, "DMS/Read ERI Data Response/User Data"), (2, "DMS/Read ERI Data Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 58,
                name: "FACTORY_DEFAULTS",
                request: &[(1, "DMS/Reset Factory Defaults Request/SPC")],
                response: &[(2, "DMS/Reset Factory Defaults Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 59,
                name: "VALIDATE_SPC",
                request: &[(1, "DMS/Validate SPC Request/SPC")],
                response: &[(2, "DMS/Validate SPC Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 60,
                name: "UIM_GET_ICCID",
                request: &[],
                response: &[(1, "DMS/UIM Get ICCID Response/ICCID"), (2, "DMS/UIM Get ICCID Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 61,
                name: "GET_FIRWARE_ID",
                request: &[],
                response: &[(1, "DMS/UIM Get Firmware ID Response/ID"), (2, "DMS/UIM Get Firmware ID Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 62,
                name: "SET_FIRMWARE_ID",
                request: &[(1, "DMS/UIM Set Firmware ID Request/ID")],
                response: &[(2, "DMS/UIM Set Firmware ID Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 63,
                name: "GET_HOST_LOCK_ID",
                request: &[],
                response: &[(1, "DMS/UIM Get Host Lock ID Response/ID"), (2, "DMS/UIM Get Host Lock ID Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 64,
                name: "UIM_GET_CK_STATUS",
                request: &[(1, "DMS/UIM Get Control Key Status Request/Facility")],
                response: &[(1, "DMS/UIM Get Control Key Status Response/Status"), (2, "DMS/UIM Get Control Key Status Response/Result Code"), (16, "DMS/UIM Get Control Key Status Response/Blocking")],
                indication: &[],
            },
            CommandEntry {
                id: 65,
                name: "UIM_SET_CK_PROT",
                request: &[(1, "DMS/UIM Set Control Key Protection Request/Facility")],
                response: &[(2, "DMS/UIM Set Control Key Protection Response/Result Code"), (16, "DMS/UIM Set Control Key Protection Response/Status")],
                indication: &[],
            },
            CommandEntry {
                id: 66,
                name: "UIM_UNBLOCK_CK",
                request: &[(1, "DMS/UIM Unblock Control Key Request/Facility")],
                response: &[(2, "DMS/UIM Unblock Control Key Response/Result Code"), (16, "DMS/UIM Unblock Control Key Response/Status")],
                indication: &[],
            },
            CommandEntry {
                id: 67,
                name: "GET_IMSI",
                request: &[],
                response: &[(1, "DMS/Get IMSI Response/IMSI"), (2, "DMS/Get IMSI Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 68,
                name: "UIM_GET_STATE",
                request: &[],
                response: &[(1, "DMS/Get UIM State Response/State"), (2, "DMS/Get UIM State Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 69,
                name: "GET_BAND_CAPS",
                request: &[],
                response: &[(1, "DMS/Get Band Capabilities Response/Bands"), (2, "DMS/Get Band Capabilities Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 70,
                name: "GET_FACTORY_ID",
                request: &[],
                response: &[(1, "DMS/Get Factory Serial Number Response/ID"), (2, "DMS/Get Factory Serial Number Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 71,
                name: "GET_FIRMWARE_PREF",
                request: &[],
                response: &[(1, "DMS/Get Firmware Preference Response/Image List"), (2, "DMS/Get Firmware Preference Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 72,
                name: "SET_FIRMWARE_PREF",
                request: &[(1, "DMS/Set Firmware Preference Request/Image List"), (16, "DMS/Set Firmware Preference Request/Override"), (17, "DMS/Set Firmware Preference Request/Index")],
                response: &[(1, "DMS/Set Firmware Preference Response/Image List"), (2, "DMS/Set Firmware Preference Response/Result Code"), (16, "DMS/Set Firmware Preference Response/Maximum")],
                indication: &[],
            },
            CommandEntry {
                id: 73,
                name: "LIST_FIRMWARE",
                request: &[],
                response: &[(1, "DMS/List Stored Firmware Response/Image List"), (2, "DMS/List Stored Firmware Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 74,
                name: "DELETE_FIRMWARE",
                request: &[(1, "DMS/Delete Stored Firmware Request/Image")],
                response: &[(2, "DMS/Delete Stored Firmware Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 75,
                name: "SET_TIME",
                request: &[(1, "DMS/Set Device Time Request/Time"), (16, "DMS/Set Device Time Request/Type")],
                response: &[(2, "DMS/Set Device Time Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 76,
                name: "GET_FIRMWARE_INFO",
                request: &[(1, "DMS/Get Stored Firmware Info Request/Image")],
                response: &[(2, "DMS/Get Stored Firmware Info Response/Result Code"), (16, "DMS/Get Stored Firmware Info Response/Boot Version"), (17, "DMS/Get Stored Firmware Info Response/PRI Version"), (18, "DMS/Get Stored Firmware Info Response/OEM Lock ID")],
                indication: &[],
            },
            CommandEntry {
                id: 77,
                name: "GET_ALT_NET_CFG",
                request: &[],
                response: &[(1, "DMS/Get Alternate Net Config Response/Config"), (2, "DMS/Get Alternate Net Config Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 78,
                name: "SET_ALT_NET_CFG",
                request: &[(1, "DMS/Set Alternate Net Config Request/Config")],
                response: &[(2, "DMS/Set Alternate Net Config Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 79,
                name: "GET_IMG_DLOAD_MODE",
                request: &[],
                response: &[(2, "DMS/Get Image Download Mode Response/Result Code"), (16, "DMS/Get Image Download Mode Response/Mode")],
                indication: &[],
            },
            CommandEntry {
                id: 80,
                name: "SET_IMG_DLOAD_MODE",
                request: &[(1, "DMS/Set Image Download Mode Request/Mode")],
                response: &[(2, "DMS/Set Image Download Mode Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 81,
                name: "GET_SW_VERSION",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 82,
                name: "SET_SPC",
                request: &[],
                response: &[],
                indication: &[],
            },
        ],
    },
    ServiceEntry {
        id: 3,
        name: "nas",
        commands: &[
            CommandEntry {
                id: 0,
                name: "RESET",
                request: &[],
                response: &[(2, "NAS/Reset Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 1,
                name: "ABORT",
                request: &[(1, "NAS/Abort Request/Transaction ID")],
                response: &[(2, "NAS/Abort Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 2,
                name: "SET_EVENT",
                request: &[(16, "NAS/Set Event Report Request/Signal Indicator"), (17, "NAS/Set Event Report Request/RF Indicator"), (18, "NAS/Set Event Report Request/Registration Reject Indicator"), (19, "NAS/Set Event Report Request/RSSI Indicator"), (20, "NAS/Set Event Report Request/ECIO Indicator"), (21, "NAS/Set Event Report Request/IO Indicator"), (22, "NAS/Set Event Report Request/SINR Indicator"), (23, "NAS/Set Event Report Request/Error Rate Indicator"), (24, "NAS/Set Event Report Request/RSRQ Indicator")],
                response: &[(2, "NAS/Set Event Report Response/Result Code")],
                indication: &[(16, "NAS/Event Report/Signal Strength"), (17, "NAS/Event Report/RF Info"), (18, "NAS/Event Report/Registration Reject"), (19, "NAS/Event Report/RSSI"), (20, "NAS/Event Report/ECIO"), (21, "NAS/Event Report/IO"), (22, "NAS/Event Report/SINR"), (23, "NAS/Event Report/Error Rate"), (24, "NAS/Event Report/RSRQ")],
            },
            CommandEntry {
                id: 3,
                name: "SET_REG_EVENT",
                request: &[(16, "NAS/Set Registration Event Report Request/System Select Indicator"), (18, "NAS/Set Registration Event Report Request/DDTM Indicator"), (19, "NAS/Set Registration Event Report Request/Serving System Indicator")],
                response: &[(2, "NAS/Set Registration Event Report Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 32,
                name: "GET_RSSI",
                request: &[(16, "NAS/Get Signal Strength Request/Request Mask")],
                response: &[(1, "NAS/Get Signal Strength Response/Signal Strength"), (2, "NAS/Get Signal Strength Response/Result Code"), (16, "NAS/Get Signal Strength Response/Signal Strength List"), (17, "NAS/Get Signal Strength Response/RSSI List"), (18, "NAS/Get Signal Strength Response/ECIO List"), (19, "NAS/Get Signal Strength Response/IO"), (20, "NAS/Get Signal Strength Response/SINR"), (21, "NAS/Get Signal Strength Response/Error Rate List")],
                indication: &[],
            },
            CommandEntry {
                id: 33,
                name: "SCAN_NETS",
                request: &[],
                response: &[(2, "NAS/Perform Network Scan Response/Result Code"), (16, "NAS/Perform Network Scan Response/Network Info"), (17, "NAS/Perform Network Scan Response/Network RAT")],
                indication: &[],
            },
            CommandEntry {
                id: 34,
                name: "REGISTER_NET",
                request: &[(1, "NAS/Initiate Network Register Request/Action"), (16, "NAS/Initiate Network Register Request/Manual Info"), (17, "NAS/Initiate Network Register Request/Change Duration")],
                response: &[(2, "NAS/Initiate Network Register Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 35,
                name: "ATTACH_DETACH",
                request: &[(16, "NAS/Initiate Attach Request/Action")],
                response: &[(2, "NAS/Initiate Attach Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 36,
                name: "GET_SS_INFO",
                request: &[],
                response: &[(1, "NAS/Get Serving System Response/Serving System"), (2, "NAS/Get Serving System Response/Result Code"), (16, "NAS/Get Serving System Response/Roaming Indicator"), (17, "NAS/Get Serving System Response/Data Services"), (18, "NAS/Get Serving System Response/Current PLMN"), (19, "NAS/Get Serving System Response/System ID"), (20, "NAS/Get Serving System Response/Base Station"), (21, "NAS/Get Serving System Response/Roaming List"), (22, "NAS/Get Serving System Response/Default Roaming"), (23, "NAS/Get Serving System Response/Time Zone"), (24, "NAS/Get Serving System Response/Protocol Revision")],
                indication: &[(1, "NAS/Serving System Indication/Serving System"), (16, "NAS/Serving System Indication/Roaming Indicator"), (17, "NAS/Serving System Indication/Data Services"), (18, "NAS/Serving System Indication/Current PLMN"), (19, "NAS/Serving System Indication/System ID"), (20, "NAS/Serving System Indication/Base Station"), (21, "NAS/Serving System Indication/Roaming List"), (22, "NAS/Serving System Indication/Default Roaming"), (23, "NAS/Serving System Indication/Time Zone"), (24, "NAS/Serving System Indication/Protocol Revision"), (25, "NAS/Serving System Indication/PLMN Change")],
            },
            CommandEntry {
                id: 37,
                name: "GET_HOME_INFO",
                request: &[],
                response: &[(1, "NAS/Get Home Network Response/Home Network"), (2, "NAS/Get Home Network Response/Result Code"), (16, "NAS/Get Home Network Response/Home IDs"), (17, "NAS/Get Home Network Response/Extended Home Network")],
                indication: &[],
            },
            CommandEntry {
                id: 38,
                name: "GET_NET_PREF_LIST",
                request: &[],
                response: &[(2, "NAS/Get Preferred Networks Response/Result Code"), (16, "NAS/Get Preferred Networks Response/Networks"), (17, "NAS/Get Preferred Networks Response/Static Networks")],
                indication: &[],
            },
            CommandEntry {
                id: 39,
                name: "SET_NET_PREF_LIST",
                request: &[(16, "NAS/Set Preferred Networks Request/Networks")],
                response: &[(2, "NAS/Set Preferred Networks Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 40,
                name: "GET_NET_BAN_LIST",
                request: &[],
                response: &[(2, "NAS/Get Forbidden Networks Response/Result Code"), (16, "NAS/Get Forbidden Networks Response/Networks")],
                indication: &[],
            },
            CommandEntry {
                id: 41,
                name: "SET_NET_BAN_LIST",
                request: &[(16, "NAS/Set Forbidden Networks Request/Networks")],
                response: &[(2, "NAS/Set Forbidden Networks Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 42,
                name: "SET_TECH_PREF",
                request: &[(1, "NAS/Set Technology Preference Request/Preference")],
                response: &[(2, "NAS/Set Technology Preference Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 43,
                name: "GET_TECH_PREF",
                request: &[],
                response: &[(1, "NAS/Get Technology Preference Response/Active Preference"), (2, "NAS/Get Technology Preference Response/Result Code"), (16, "NAS/Get Technology Preference Response/Persistent Preference")],
                indication: &[],
            },
            CommandEntry {
                id: 44,
                name: "GET_ACCOLC",
                request: &[],
                response: &[(1, "NAS/Get ACCOLC Response/ACCOLC"), (2, "NAS/Get ACCOLC Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 45,
                name: "SET_ACCOLC",
                request: &[(1, "NAS/Set ACCOLC Request/ACCOLC")],
                response: &[(2, "NAS/Set ACCOLC Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 46,
                name: "GET_SYSPREF",
                request: &[],
                response: &[(1, "NAS/Get System Preference/Pref"), (2, "NAS/Get System Preference/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 47,
                name: "GET_NET_PARAMS",
                request: &[],
                response: &[(2, "NAS/Get Network Parameters Response/Result Code"), (17, "NAS/Get Network Parameters Response/SCI"), (18, "NAS/Get Network Parameters Response/SCM"), (19, "NAS/Get Network Parameters Response/Registration"), (20, "NAS/Get Network Parameters Response/CDMA 1xEV-DO Revision"), (21, "NAS/Get Network Parameters Response/CDMA 1xEV-DO SCP Custom"), (22, "NAS/Get Network Parameters Response/Roaming")],
                indication: &[],
            },
            CommandEntry {
                id: 48,
                name: "SET_NET_PARAMS",
                request: &[(16, "NAS/Set Network Parameters Request/SPC"), (20, "NAS/Set Network Parameters Request/CDMA 1xEV-DO Revision"), (21, "NAS/Set Network Parameters Request/CDMA 1xEV-DO SCP Custom"), (22, "NAS/Set Network Parameters Request/Roaming")],
                response: &[(2, "NAS/Set Network Parameters Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 49,
                name: "GET_RF_INFO",
                request: &[],
                response: &[(1, "NAS/Get RF Info Response/RF Info"), (2, "NAS/Get RF Info Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 50,
                name: "GET_AAA_AUTH_STATUS",
                request: &[],
                response: &[(1, "NAS/Get AN-AAA Authentication Status Response/Status"), (2, "NAS/Get AN-AAA Authentication Status Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 51,
                name: "SET_SYS_SELECT_PREF",
                request: &[(16, "NAS/Set System Selection Pref Request/Emergency Mode"), (17, "NAS/Set System Selection Pref Request/Mode"), (18, "NAS/Set System Selection Pref Request/Band"), (19, "NAS/Set System Selection Pref Request/PRL"), (20, "NAS/Set System Selection Pref Request/Roaming")],
                response: &[(2, "NAS/Set System Selection Pref Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 52,
                name: "GET_SYS_SELECT_PREF",
                request: &[],
                response: &[(2, "NAS/Get System Selection Pref Response/Result Code"), (16, "NAS/Get System Selection Pref Response/Emergency Mode"), (17, "NAS/Get System Selection Pref Response/Mode"), (18, "NAS/Get System Selection Pref Response/Band"), (19, "NAS/Get System Selection Pref Response/PRL"), (20, "NAS/Get System Selection Pref Response/Roaming")],
                indication: &[(16, "NAS/System Selection Pref Indication/Emergency Mode"), (17, "NAS/System Selection Pref Indication/Mode"), (18, "NAS/System Selection Pref Indication/Band"), (19, "NAS/System Selection Pref Indication/PRL"), (20, "NAS/System Selection Pref Indication/Roaming")],
            },
            CommandEntry {
                id: 55,
                name: "SET_DDTM_PREF",
                request: &[(1, "NAS/Set DDTM Preference Request/DDTM")],
                response: &[(2, "NAS/Set DDTM Preference Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 56,
                name: "GET_DDTM_PREF",
                request: &[],
                response: &[(1, "NAS/Get DDTM Preference Response/DDTM"), (2, "NAS/Get DDTM Preference Response/Result Code")],
                indication: &[(1, "NAS/DDTM Preference Indication/DDTM")],
            },
            CommandEntry {
                id: 59,
                name: "GET_PLMN_MODE",
                request: &[],
                response: &[(2, "NAS/Get CSP PLMN Mode Response/Result Code"), (16, "NAS/Get CSP PLMN Mode Response/Mode")],
                indication: &[],
            },
            CommandEntry {
                id: 60,
                name: "PLMN_MODE_IND",
                request: &[],
                response: &[],
                indication: &[(16, "NAS/CSP PLMN Mode Indication/Mode")],
            },
            CommandEntry {
                id: 68,
                name: "GET_PLMN_NAME",
                request: &[(1, "NAS/Get PLMN Name Request/PLMN")],
                response: &[(2, "NAS/Get PLMN Name Response/Result Code"), (16, "NAS/Get PLMN Name Response/Name")],
                indication: &[],
            },
            CommandEntry {
                id: 69,
                name: "BIND_SUBS",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 70,
                name: "MANAGED_ROAMING_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 71,
                name: "DSB_PREF_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 72,
                name: "SUBS_INFO_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 73,
                name: "GET_MODE_PREF",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 75,
                name: "SET_DSB_PREF",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 76,
                name: "NETWORK_TIME_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 77,
                name: "GET_SYSTEM_INFO",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 78,
                name: "SYSTEM_INFO_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 79,
                name: "GET_SIGNAL_INFO",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 80,
                name: "CFG_SIGNAL_INFO",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 81,
                name: "SIGNAL_INFO_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 82,
                name: "GET_ERROR_RATE",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 83,
                name: "ERROR_RATE_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 84,
                name: "EVDO_SESSION_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 85,
                name: "EVDO_UATI_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 86,
                name: "GET_EVDO_SUBTYPE",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 87,
                name: "GET_EVDO_COLOR_CODE",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 88,
                name: "GET_ACQ_SYS_MODE",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 89,
                name: "SET_RX_DIVERSITY",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 90,
                name: "GET_RX_TX_INFO",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 91,
                name: "UPDATE_AKEY_EXT",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 92,
                name: "GET_DSB_PREF",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 93,
                name: "DETACH_LTE",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 94,
                name: "BLOCK_LTE_PLMN",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 95,
                name: "UNBLOCK_LTE_PLMN",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 96,
                name: "RESET_LTE_PLMN_BLK",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 97,
                name: "CUR_PLMN_NAME_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 98,
                name: "CONFIG_EMBMS",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 99,
                name: "GET_EMBMS_STATUS",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 100,
                name: "EMBMS_STATUS_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 101,
                name: "GET_CDMA_POS_INFO",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 102,
                name: "RF_BAND_INFO_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
        ],
    },
    ServiceEntry {
        id: 4,
        name: "qos",
        commands: &[],
    },
    ServiceEntry {
        id: 5,
        name: "wms",
        commands: &[
            CommandEntry {
                id: 0,
                name: "RESET",
                request: &[],
                response: &[(2, "WMS/Reset Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 1,
                name: "SET_EVENT",
                request: &[(16, "WMS/Set Event Report Request/New MT Message Indicator")],
                response: &[(2, "WMS/Set Event Report Response/Result Code")],
                indication: &[(16, "WMS/Event Report/Received MT Message"), (17, "WMS/Event Report/Transfer Route MT Message"), (18, "WMS/Event Report/Message Mode")],
            },
            CommandEntry {
                id: 32,
                name: "RAW_SEND",
                request: &[(1, "WMS/Raw Send Request/Message Data"), (16, "WMS/Raw Send Request/Force On DC"), (17, "WMS/Raw Send Request/Follow On DC"), (18, "WMS/Raw Send Request/Link Control")],
                response: &[(2, "WMS/Raw Send Response/Result Code"), (16, "WMS/Raw Send Response/Cause Code"), (17, "WMS/Raw Send Response/Error Class"), (18, "WMS/Raw Send Response/Cause Info")],
                indication: &[],
            },
            CommandEntry {
                id: 33,
                name: "RAW_WRITE",
                request: &[(1, "WMS/Raw Write Request/Message Data")],
                response: &[(1, "WMS/Raw Write Response/Message Index"), (2, "WMS/Raw Write Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 34,
                name: "RAW_READ",
                request: &[(1, "WMS/Raw Read Request/Message Index"), (16, "WMS/Raw Read Request/Message Mode")],
                response: &[(1, "WMS/Raw Read Response/Message Data"), (2, "WMS/Raw Read Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 35,
                name: "MODIFY_TAG",
                request: &[(1, "WMS/Modify Tag Request/Message Tag"), (16, "WMS/Modify Tag Request/Message Mode")],
                response: &[(2, "WMS/Modify Tag Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 36,
                name: "DELETE",
                request: &[(1, "WMS/Delete Request/Memory Storage"), (16, "WMS/Delete Request/Message Index"), (17, "WMS/Delete Request/Message Tag"), (18, "WMS/Delete Request/Message Mode")],
                response: &[(2, "WMS/Delete Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 48,
                name: "GET_MSG_PROTOCOL",
                request: &[],
                response: &[(1, "WMS/Get Message Protocol Response/Message Protocol"), (2, "WMS/Get Message Protocol Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 49,
                name: "GET_MSG_LIST",
                request: &[(1, "WMS/List Messages Request/Memory Storage"), (16, "WMS/List Messages Request/Message Tag"), (17, "WMS/List Messages Request/Message Mode")],
                response: &[(1, "WMS/List Messages Response/Message List"), (2, "WMS/List Messages Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 50,
                name: "SET_ROUTES",
                request: &[(1, "WMS/Set Routes Request/Route List"), (16, "WMS/Set Routes Request/Transfer Status Report")],
                response: &[(2, "WMS/Set Routes Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 51,
                name: "GET_ROUTES",
                request: &[],
                response: &[(1, "WMS/Get Routes Response/Route List"), (2, "WMS/Get Routes Response/Result Code"), (16, "WMS/Get Routes Response/Transfer Status Report")],
                indication: &[],
            },
            CommandEntry {
                id: 52,
                name: "GET_SMSC_ADDR",
                request: &[],
                response: &[(1, "WMS/Get SMSC Address Response/Address"), (2, "WMS/Get SMSC Address Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 53,
                name: "SET_SMSC_ADDR",
                request: &[(1, "WMS/Set SMSC Address Request/Address"), (16, "WMS/Set SMSC Address Request/Address Type")],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 54,
                name: "GET_MSG_LIST_MAX",
                request: &[(1, "WMS/Get Storage Max Size Request/Memory Storage"), (16, "WMS/Get Storage Max Size Request/Message Mode")],
                response: &[(1, "WMS/Get Storage Max Size Response/Max Size"), (2, "WMS/Get Storage Max Size Response/Result Code"), (16, "WMS/Get Storage Max Size Response/Available Size")],
                indication: &[],
            },
            CommandEntry {
                id: 55,
                name: "SEND_ACK",
                request: &[(1, "WMS/Send ACK Request/ACK"), (16, "WMS/Send ACK Request/3GPP2 Failure Info"), (17, "WMS/Send ACK Request/3GPP Failure Info")],
                response: &[(2, "WMS/Send ACK Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 56,
                name: "SET_RETRY_PERIOD",
                request: &[(1, "WMS/Set Retry Period Request/Period")],
                response: &[(2, "WMS/Set Retry Period Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 57,
                name: "SET_RETRY_INTERVAL",
                request: &[(1, "WMS/Set Retry Interval Request/Interval")],
                response: &[(2, "WMS/Set Retry Interval Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 58,
                name: "SET_DC_DISCO_TIMER",
                request: &[(1, "WMS/Set DC Disconnect Timer Request/Timer")],
                response: &[(2, "WMS/Set DC Disconnect Timer Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 59,
                name: "SET_MEMORY_STATUS",
                request: &[(1, "WMS/Set Memory Status Request/Status")],
                response: &[(2, "WMS/Set Memory Status Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 60,
                name: "SET_BC_ACTIVATION",
                request: &[(1, "WMS/Set Broadcast Activation Request/BC Info")],
                response: &[(2, "WMS/Set Broadcast Activation Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 61,
                name: "SET_BC_CONFIG",
                request: &[(1, "WMS/Set Broadcast Config Request/Mode"), (16, "WMS/Set Broadcast Config Request/3GPP Info"), (17, "WMS/Set Broadcast Config Request/3GPP2 Info")],
                response: &[(2, "WMS/Set Broadcast Config Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 62,
                name: "GET_BC_CONFIG",
                request: &[(1, "WMS/Get Broadcast Config Request/Mode")],
                response: &[(2, "WMS/Get Broadcast Config Response/Result Code"), (16, "WMS/Get Broadcast Config Response/3GPP Info"), (17, "WMS/Get Broadcast Config Response/3GPP2 Info")],
                indication: &[],
            },
            CommandEntry {
                id: 63,
                name: "MEMORY_FULL_IND",
                request: &[],
                response: &[],
                indication: &[(1, "WMS/Memory Full Indication/Info")],
            },
            CommandEntry {
                id: 64,
                name: "GET_DOMAIN_PREF",
                request: &[],
                response: &[(1, "WMS/Get Domain Preference Response/Pref"), (2, "WMS/Get Domain Preference Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 65,
                name: "SET_DOMAIN_PREF",
                request: &[(1, "WMS/Set Domain Preference Request/Pref")],
                response: &[(2, "WMS/Set Domain Preference Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 66,
                name: "MEMORY_SEND",
                request: &[(1, "WMS/Send From Memory Store Request/Info")],
                response: &[(2, "WMS/Send From Memory Store Response/Result Code"), (16, "WMS/Send From Memory Store Response/Message ID"), (17, "WMS/Send From Memory Store Response/Cause Code"), (18, "WMS/Send From Memory Store Response/Error Class"), (19, "WMS/Send From Memory Store Response/Cause Info")],
                indication: &[],
            },
            CommandEntry {
                id: 67,
                name: "GET_MSG_WAITING",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 68,
                name: "MSG_WAITING_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 69,
                name: "SET_PRIMARY_CLIENT",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 70,
                name: "SMSC_ADDR_IND",
                request: &[],
                response: &[],
                indication: &[(1, "WMS/SMSC Address Indication/Address")],
            },
            CommandEntry {
                id: 71,
                name: "INDICATOR_REG",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 72,
                name: "GET_TRANSPORT_INFO",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 73,
                name: "TRANSPORT_INFO_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 74,
                name: "GET_NW_REG_INFO",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 75,
                name: "NW_REG_INFO_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 76,
                name: "BIND_SUBSCRIPTION",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 77,
                name: "GET_INDICATOR_REG",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 78,
                name: "GET_SMS_PARAMETERS",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 79,
                name: "SET_SMS_PARAMETERS",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 80,
                name: "CALL_STATUS_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
        ],
    },
    ServiceEntry {
        id: 6,
        name: "pds",
        commands: &[
            CommandEntry {
                id: 0,
                name: "RESET",
                request: &[],
                response: &[(2, "PDS/Reset Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 1,
                name: "SET_EVENT",
                request: &[(16, "PDS/Set Event Report Request/NMEA Indicator"), (17, "PDS/Set Event Report Request/Mode Indicator"), (18, "PDS/Set Event Report Request/Raw Indicator"), (19, "PDS/Set Event Report Request/XTRA Request Indicator"), (20, "PDS/Set Event Report Request/Time Injection Indicator"), (21, "PDS/Set Event Report Request/Wi-Fi Indicator"), (22, "PDS/Set Event Report Request/Satellite Indicator"), (23, "PDS/Set Event Report Request/VX Network Indicator"), (24, "PDS/Set Event Report Request/SUPL Network Indicator"), (25, "PDS/Set Event Report Request/UMTS CP Network Indicator"), (26, "PDS/Set Event Report Request/PDS Comm Indicator")],
                response: &[(2, "PDS/Set Event Report Response/Result Code")],
                indication: &[(16, "PDS/Event Report/NMEA Sentence"), (17, "PDS/Event Report/NMEA Sentence Plus Mode"), (18, "PDS/Event Report/Position Session Status"), (19, "PDS/Event Report/Parsed Position Data"), (20, "PDS/Event Report/External XTRA Request"), (21, "PDS/Event Report/External Time Injection Request"), (22, "PDS/Event Report/External Wi-Fi Position Request"), (23, "PDS/Event Report/Satellite Info"), (24, "PDS/Event Report/VX Network Initiated Prompt"), (25, "PDS/Event Report/SUPL Network Initiated Prompt"), (26, "PDS/Event Report/UMTS CP Network Initiated Prompt"), (27, "PDS/Event Report/Comm Events")],
            },
            CommandEntry {
                id: 32,
                name: "GET_STATE",
                request: &[],
                response: &[(1, "PDS/Get Service State Response/State"), (2, "PDS/Get Service State Response/Result Code")],
                indication: &[(1, "PDS/Service State Indication/State")],
            },
            CommandEntry {
                id: 33,
                name: "SET_STATE",
                request: &[(1, "PDS/Set Service State Request/State")],
                response: &[(2, "PDS/Set Service State Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 34,
                name: "START_SESSION",
                request: &[(1, "PDS/Start Tracking Session Request/Session")],
                response: &[(2, "PDS/Start Tracking Session Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 35,
                name: "GET_SESSION_INFO",
                request: &[],
                response: &[(1, "PDS/Get Tracking Session Info Response/Info"), (2, "PDS/Get Tracking Session Info Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 36,
                name: "FIX_POSITION",
                request: &[],
                response: &[(2, "PDS/Fix Position Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 37,
                name: "END_SESSION",
                request: &[],
                response: &[(2, "PDS/End Tracking Session Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 38,
                name: "GET_NMEA_CFG",
                request: &[],
                response: &[(1, "PDS/Get NMEA Config Response/Config"), (2, "PDS/Get NMEA Config Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 39,
                name: "SET_NMEA_CFG",
                request: &[(1, "PDS/Set NMEA Config Request/Config")],
                response: &[(2, "PDS/Set NMEA Config Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 40,
                name: "INJECT_TIME",
                request: &[(1, "PDS/Inject Time Reference Request/Time")],
                response: &[(2, "PDS/Inject Time Reference Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 41,
                name: "GET_DEFAULTS",
                request: &[],
                response: &[(1, "PDS/Get Defaults Response/Defaults"), (2, "PDS/Get Defaults Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 42,
                name: "SET_DEFAULTS",
                request: &[(1, "PDS/Set Defaults Request/Defaults")],
                response: &[(2, "PDS/Set Defaults Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 43,
                name: "GET_XTRA_PARAMS",
                request: &[],
                response: &[(2, "PDS/Get XTRA Parameters Response/Result Code"), (16, "PDS/Get XTRA Parameters Response/Automatic"), (17, "PDS/Get XTRA Parameters Response/Medium"), (18, "PDS/Get XTRA Parameters Response/Network"), (19, "PDS/Get XTRA Parameters Response/Validity"), (20, "PDS/Get XTRA Parameters Response/Embedded")],
                indication: &[],
            },
            CommandEntry {
                id: 44,
                name: "SET_XTRA_PARAMS",
                request: &[(16, "PDS/Set XTRA Parameters Request/Automatic"), (17, "PDS/Set XTRA Parameters Request/Medium"), (18, "PDS/Set XTRA Parameters Request/Network"), (20, "PDS/Set XTRA Parameters Request/Embedded")],
                response: &[(2, "PDS/Set XTRA Parameters Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 45,
                name: "FORCE_XTRA_DL",
                request: &[],
                response: &[(2, "PDS/Force XTRA Download Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 46,
                name: "GET_AGPS_CONFIG",
                request: &[(18, "PDS/Get AGPS Config Request/Network Mode")],
                response: &[(2, "PDS/Get AGPS Config Response/Result Code"), (16, "PDS/Get AGPS Config Response/Server"), (17, "PDS/Get AGPS Config Response/Server URL")],
                indication: &[],
            },
            CommandEntry {
                id: 47,
                name: "SET_AGPS_CONFIG",
                request: &[(16, "PDS/Set AGPS Config Request/Server"), (17, "PDS/Set AGPS Config Request/Server URL"), (18, "PDS/Set AGPS Config Request/Network Mode")],
                response: &[(2, "PDS/Set AGPS Config Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 48,
                name: "GET_SVC_AUTOTRACK",
                request: &[],
                response: &[(1, "PDS/Get Service Auto-Tracking State Response/State"), (2, "PDS/Get Service Auto-Tracking State Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 49,
                name: "SET_SVC_AUTOTRACK",
                request: &[(1, "PDS/Set Service Auto-Tracking State Request/State")],
                response: &[(2, "PDS/Set Service Auto-Tracking State Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 50,
                name: "GET_COM_AUTOTRACK",
                request: &[],
                response: &[(1, "PDS/Get COM Port Auto-Tracking Config Response/Config"), (2, "PDS/Get COM Port Auto-Tracking Config Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 51,
                name: "SET_COM_AUTOTRACK",
                request: &[(1, "PDS/Set COM Port Auto-Tracking Config Request/Config")],
                response: &[(2, "PDS/Set COM Port Auto-Tracking Config Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 52,
                name: "RESET_DATA",
                request: &[(16, "PDS/Reset PDS Data Request/GPS Data"), (17, "PDS/Reset PDS Data Request/Cell Data")],
                response: &[(2, "PDS/Reset PDS Data Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 53,
                name: "SINGLE_FIX",
                request: &[(16, "PDS/Single Position Fix Request/Mode"), (17, "PDS/Single Position Fix Request/Timeout"), (18, "PDS/Single Position Fix Request/Accuracy")],
                response: &[(2, "PDS/Single Position Fix Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 54,
                name: "GET_VERSION",
                request: &[],
                response: &[(1, "PDS/Get Service Version Response/Version"), (2, "PDS/Get Service Version Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 55,
                name: "INJECT_XTRA",
                request: &[(1, "PDS/Inject XTRA Data Request/Data")],
                response: &[(2, "PDS/Inject XTRA Data Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 56,
                name: "INJECT_POSITION",
                request: &[(16, "PDS/Inject Position Data Request/Timestamp"), (17, "PDS/Inject Position Data Request/Latitude"), (18, "PDS/Inject Position Data Request/Longitude"), (19, "PDS/Inject Position Data Request/Altitude Ellipsoid"), (20, "PDS/Inject Position Data Request/Altitude Sea Level"), (21, "PDS/Inject Position Data Request/Horizontal Uncertainty"), (22, "PDS/Inject Position Data Request/Vertical Uncertainty"), (23, "PDS/Inject Position Data Request/Horizontal Confidence"), (24, "PDS/Inject Position Data Request/Vertical Confidence"), (25, "PDS/Inject Position Data Request/Source")],
                response: &[(2, "PDS/Inject Position Data Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 57,
                name: "INJECT_WIFI",
                request: &[(16, "PDS/Inject Wi-Fi Position Data Request/Time"), (17, "PDS/Inject Wi-Fi Position Data Request/Position"), (18, "PDS/Inject Wi-Fi Position Data Request/AP Info")],
                response: &[(2, "PDS/Inject Wi-Fi Position Data Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 58,
                name: "GET_SBAS_CONFIG",
                request: &[],
                response: &[(2, "PDS/Get SBAS Config Response/Result Code"), (16, "PDS/Get SBAS Config Response/Config")],
                indication: &[],
            },
            CommandEntry {
                id: 59,
                name: "SET_SBAS_CONFIG",
                request: &[(16, "PDS/Set SBAS Config Request/Config")],
                response: &[(2, "PDS/Set SBAS Config Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 60,
                name: "SEND_NI_RESPONSE",
                request: &[(1, "PDS/Send Network Initiated Response Request/Action"), (16, "PDS/Send Network Initiated Response Request/VX"), (17, "PDS/Send Network Initiated Response Request/SUPL"), (18, "PDS/Send Network Initiated Response Request/UMTS CP")],
                response: &[(2, "PDS/Send Network Initiated Response Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 61,
                name: "INJECT_ABS_TIME",
                request: &[(1, "PDS/Inject Absolute Time Request/Time")],
                response: &[(2, "PDS/Inject Absolute Time Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 62,
                name: "INJECT_EFS",
                request: &[(1, "PDS/Inject EFS Data Request/Date File")],
                response: &[(2, "PDS/Inject EFS Data Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 63,
                name: "GET_DPO_CONFIG",
                request: &[],
                response: &[(2, "PDS/Get DPO Config Response/Result Code"), (16, "PDS/Get DPO Config Response/Config")],
                indication: &[],
            },
            CommandEntry {
                id: 64,
                name: "SET_DPO_CONFIG",
                request: &[(1, "PDS/Set DPO Config Request/Config")],
                response: &[(2, "PDS/Set DPO Config Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 65,
                name: "GET_ODP_CONFIG",
                request: &[],
                response: &[(2, "PDS/Get ODP Config Response/Result Code"), (16, "PDS/Get ODP Config Response/Config")],
                indication: &[],
            },
            CommandEntry {
                id: 66,
                name: "SET_ODP_CONFIG",
                request: &[(16, "PDS/Set ODP Config Request/Config")],
                response: &[(2, "PDS/Set ODP Config Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 67,
                name: "CANCEL_SINGLE_FIX",
                request: &[],
                response: &[(2, "PDS/Cancel Single Position Fix Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 68,
                name: "GET_GPS_STATE",
                request: &[],
                response: &[(2, "PDS/Get GPS State Response/Result Code"), (16, "PDS/Get GPS State Response/State")],
                indication: &[],
            },
            CommandEntry {
                id: 80,
                name: "GET_METHODS",
                request: &[],
                response: &[(2, "PDS/Get Position Methods State Response/Result Code"), (16, "PDS/Get Position Methods State Response/XTRA Time"), (17, "PDS/Get Position Methods State Response/XTRA Data"), (18, "PDS/Get Position Methods State Response/Wi-Fi")],
                indication: &[],
            },
            CommandEntry {
                id: 81,
                name: "SET_METHODS",
                request: &[(16, "PDS/Set Position Methods State Request/XTRA Time"), (17, "PDS/Set Position Methods State Request/XTRA Data"), (18, "PDS/Set Position Methods State Request/Wi-Fi")],
                response: &[(2, "PDS/Set Position Methods State Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 82,
                name: "INJECT_SENSOR",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 83,
                name: "INJECT_TIME_SYNC",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 84,
                name: "GET_SENSOR_CFG",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 85,
                name: "SET_SENSOR_CFG",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 86,
                name: "GET_NAV_CFG",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 87,
                name: "SET_NAV_CFG",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 90,
                name: "SET_WLAN_BLANK",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 91,
                name: "SET_LBS_SC_RPT",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 92,
                name: "SET_LBS_SC",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 93,
                name: "GET_LBS_ENCRYPT_CFG",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 94,
                name: "SET_LBS_UPDATE_RATE",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 95,
                name: "SET_CELLDB_CONTROL",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 96,
                name: "READY_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
        ],
    },
    ServiceEntry {
        id: 7,
        name: "auth",
        commands: &[
            CommandEntry {
                id: 32,
                name: "START_EAP",
                request: &[(16, "AUTH/Start EAP Session Request/Method Mask")],
                response: &[(2, "AUTH/Start EAP Session Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 33,
                name: "SEND_EAP",
                request: &[(1, "AUTH/Send EAP Packet Request/Request Packet")],
                response: &[(1, "AUTH/Send EAP Packet Response/Response Packet"), (2, "AUTH/Send EAP Packet Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 34,
                name: "EAP_RESULT_IND",
                request: &[],
                response: &[(1, "AUTH/EAP Session Result/Result")],
                indication: &[],
            },
            CommandEntry {
                id: 35,
                name: "GET_EAP_KEYS",
                request: &[],
                response: &[(1, "AUTH/Get EAP Session Keys Response/Session Keys"), (2, "AUTH/Get EAP Session Keys Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 36,
                name: "END_EAP",
                request: &[],
                response: &[(2, "AUTH/End EAP Session Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 37,
                name: "RUN_AKA",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 38,
                name: "AKA_RESULT_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
        ],
    },
    ServiceEntry {
        id: 9,
        name: "voice",
        commands: &[
            CommandEntry {
                id: 3,
                name: "INDICATION_REG",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 32,
                name: "CALL_ORIGINATE",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 33,
                name: "CALL_END",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 34,
                name: "CALL_ANSWER",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 36,
                name: "GET_CALL_INFO",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 37,
                name: "OTASP_STATUS_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 38,
                name: "INFO_REC_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 39,
                name: "SEND_FLASH",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 40,
                name: "BURST_DTMF",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 41,
                name: "START_CONT_DTMF",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 42,
                name: "STOP_CONT_DTMF",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 43,
                name: "DTMF_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 44,
                name: "SET_PRIVACY_PREF",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 45,
                name: "PRIVACY_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 46,
                name: "ALL_STATUS_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 47,
                name: "GET_ALL_STATUS",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 49,
                name: "MANAGE_CALLS",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 50,
                name: "SUPS_NOTIFICATION_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 51,
                name: "SET_SUPS_SERVICE",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 52,
                name: "GET_CALL_WAITING",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 53,
                name: "GET_CALL_BARRING",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 54,
                name: "GET_CLIP",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 55,
                name: "GET_CLIR",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 56,
                name: "GET_CALL_FWDING",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 57,
                name: "SET_CALL_BARRING_PWD",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 58,
                name: "ORIG_USSD",
                request: &[(1, "Voice/Initiate USSD Request/Info")],
                response: &[(2, "Voice/Initiate USSD Response/Result Code"), (16, "Voice/Initiate USSD Response/Fail Cause"), (17, "Voice/Initiate USSD Response/Alpha ID"), (18, "Voice/Initiate USSD Response/Data")],
                indication: &[],
            },
            CommandEntry {
                id: 59,
                name: "ANSWER_USSD",
                request: &[(1, "Voice/Answer USSD Request/Info")],
                response: &[(2, "Voice/Answer USSD Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 60,
                name: "CANCEL_USSD",
                request: &[],
                response: &[(2, "Voice/Cancel USSD Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 61,
                name: "USSD_RELEASE_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 62,
                name: "USSD_IND",
                request: &[],
                response: &[],
                indication: &[(1, "Voice/USSD Indication/Type"), (16, "Voice/USSD Indication/Data")],
            },
            CommandEntry {
                id: 63,
                name: "UUS_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 64,
                name: "SET_CONFIG",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 65,
                name: "GET_CONFIG",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 66,
                name: "SUPS_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 67,
                name: "ASYNC_ORIG_USSD",
                request: &[(1, "Voice/Async Initiate USSD Request/Info")],
                response: &[(2, "Voice/Async Initiate USSD Response/Result Code")],
                indication: &[(16, "Voice/USSD Async Indication/Error"), (17, "Voice/USSD Async Indication/Fail Cause"), (18, "Voice/USSD Async Indication/Info"), (19, "Voice/USSD Async Indication/Alpha ID")],
            },
            CommandEntry {
                id: 68,
                name: "BIND_SUBSCRIPTION",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 69,
                name: "ALS_SET_LINE_SW",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 70,
                name: "ALS_SELECT_LINE",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 71,
                name: "AOC_RESET_ACM",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 72,
                name: "AOC_SET_ACM_MAX",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 73,
                name: "AOC_GET_CM_INFO",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 74,
                name: "AOC_LOW_FUNDS_IND",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 75,
                name: "GET_COLP",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 76,
                name: "GET_COLR",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 77,
                name: "GET_CNAP",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 78,
                name: "MANAGE_IP_CALLS",
                request: &[],
                response: &[],
                indication: &[],
            },
        ],
    },
    ServiceEntry {
        id: 224,
        name: "cat",
        commands: &[
            CommandEntry {
                id: 0,
                name: "RESET",
                request: &[],
                response: &[(2, "CAT/Reset Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 1,
                name: "SET_EVENT",
                request: &[(16, "CAT/Set Event Report Request/Report Mask")],
                response: &[(2, "CAT/Set Event Report Response/Result Code"), (16, "CAT/Set Event Report Response/Reg Status Mask")],
                indication: &[(16, "CAT/Event Report/Display Text Event"), (17, "CAT/Event Report/Get Inkey Event"), (18, "CAT/Event Report/Get Input Event"), (19, "CAT/Event Report/Setup Menu Event"), (20, "CAT/Event Report/Select Item Event"), (21, "CAT/Event Report/Alpha ID Available"), (22, "CAT/Event Report/Setup Event List"), (23, "CAT/Event Report/Setup Idle Mode Text Event"), (24, "CAT/Event Report/Language Notification Event"), (25, "CAT/Event Report/Refresh Event"), (26, "CAT/Event Report/End Proactive Session")],
            },
            CommandEntry {
                id: 32,
                name: "GET_STATE",
                request: &[],
                response: &[(1, "CAT/Get Service State Response/CAT Service State"), (2, "CAT/Get Service State Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 33,
                name: "SEND_TERMINAL",
                request: &[(1, "CAT/Send Terminal Response Request/Terminal Response Type")],
                response: &[(2, "CAT/Send Terminal Response Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 34,
                name: "SEND_ENVELOPE",
                request: &[(1, "CAT/Envelope Command Request/Envelope Command")],
                response: &[(2, "CAT/Envelope Command Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 35,
                name: "GET_EVENT",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 36,
                name: "SEND_DECODED_TERMINAL",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 37,
                name: "SEND_DECODED_ENVELOPE",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 38,
                name: "EVENT_CONFIRMATION",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 39,
                name: "SCWS_OPEN_CHANNEL",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 40,
                name: "SCWS_CLOSE_CHANNEL",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 41,
                name: "SCWS_SEND_DATA",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 42,
                name: "SCWS_DATA_AVAILABLE",
                request: &[],
                response: &[],
                indication: &[],
            },
            CommandEntry {
                id: 43,
                name: "SCWS_CHANNEL_STATUS",
                request: &[],
                response: &[],
                indication: &[],
            },
        ],
    },
    ServiceEntry {
        id: 225,
        name: "rms",
        commands: &[
            CommandEntry {
                id: 0,
                name: "RESET",
                request: &[],
                response: &[(2, "RMS/Reset Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 32,
                name: "GET_SMS_WAKE",
                request: &[],
                response: &[(2, "RMS/Get SMS Wake Response/Result Code"), (16, "RMS/Get SMS Wake Response/State"), (17, "RMS/Get SMS Wake Request/Mask")],
                indication: &[],
            },
            CommandEntry {
                id: 33,
                name: "SET_SMS_WAKE",
                request: &[(16, "RMS/Set SMS Wake Request/State"), (17, "RMS/Set SMS Wake Request/Mask")],
                response: &[(2, "RMS/Set SMS Wake Response/Result Code")],
                indication: &[],
            },
        ],
    },
    ServiceEntry {
        id: 226,
        name: "oma",
        commands: &[
            CommandEntry {
                id: 0,
                name: "RESET",
                request: &[],
                response: &[(2, "OMA/Reset Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 1,
                name: "SET_EVENT",
                request: &[(16, "OMA/Set Event Report Request/NIA"), (17, "OMA/Set Event Report Request/Status")],
                response: &[(2, "OMA/Set Event Report Response/Result Code")],
                indication: &[(16, "OMA/Event Report/NIA"), (17, "OMA/Event Report/Status"), (18, "OMA/Event Report/Failure")],
            },
            CommandEntry {
                id: 32,
                name: "START_SESSION",
                request: &[(16, "OMA/Start Session Request/Type")],
                response: &[(2, "OMA/Start Session Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 33,
                name: "CANCEL_SESSION",
                request: &[],
                response: &[(2, "OMA/Cancel Session Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 34,
                name: "GET_SESSION_INFO",
                request: &[],
                response: &[(2, "OMA/Get Session Info Response/Result Code"), (16, "OMA/Get Session Info Response/Info"), (17, "OMA/Get Session Info Response/Failure"), (18, "OMA/Get Session Info Response/Retry"), (19, "OMA/Get Session Info Response/NIA")],
                indication: &[],
            },
            CommandEntry {
                id: 35,
                name: "SEND_SELECTION",
                request: &[(16, "OMA/Send Selection Request/Type")],
                response: &[(2, "OMA/Send Selection Response/Result Code")],
                indication: &[],
            },
            CommandEntry {
                id: 36,
                name: "GET_FEATURES",
                request: &[],
                response: &[(2, "OMA/Get Features Response/Result Code"), (16, "OMA/Get Features Response/Provisioning"), (17, "OMA/Get Features Response/PRL Update"), (18, "OMA/Get Features Response/HFA Feature"), (19, "OMA/Get Features Response/HFA Done State")],
                indication: &[],
            },
            CommandEntry {
                id: 37,
                name: "SET_FEATURES",
                request: &[(16, "OMA/Set Features Response/Provisioning"), (17, "OMA/Set Features Response/PRL Update"), (18, "OMA/Set Features Response/HFA Feature")],
                response: &[(2, "OMA/Set Features Response/Result Code")],
                indication: &[],
            },
        ],
    },
];
