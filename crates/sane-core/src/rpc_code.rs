//! Remote procedure codes: the first word of every request.

use crate::wire_enum::wire_enum;

wire_enum! {
    /// The RPC a client request invokes on the daemon.
    pub enum RpcCode {
        /// `SANE_NET_INIT`: handshake carrying version code and user name.
        Init = 0 => "init",
        GetDevices = 1 => "get_devices",
        Open = 2 => "open",
        Close = 3 => "close",
        GetOptionDescriptors = 4 => "get_option_descriptors",
        ControlOption = 5 => "control_option",
        GetParameters = 6 => "get_parameters",
        Start = 7 => "start",
        Cancel = 8 => "cancel",
        /// Answer to an authorization challenge.
        Authorize = 9 => "authorize",
        Exit = 10 => "exit",
    }
}
