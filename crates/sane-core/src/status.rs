//! `SANE_Status`: result codes reported by backends.

use crate::wire_enum::wire_enum;

wire_enum! {
    /// Outcome of a SANE operation.
    pub enum Status {
        Good = 0 => "good",
        Unsupported = 1 => "unsupported",
        Cancelled = 2 => "cancelled",
        DeviceBusy = 3 => "device_busy",
        Invalid = 4 => "invalid",
        /// No more data for the current frame.
        Eof = 5 => "eof",
        Jammed = 6 => "jammed",
        /// Document feeder is empty.
        NoDocs = 7 => "no_docs",
        CoverOpen = 8 => "cover_open",
        IoError = 9 => "io_error",
        NoMem = 10 => "no_mem",
        AccessDenied = 11 => "access_denied",
    }
}

impl Status {
    /// True only for `Good`.
    pub fn is_good(self) -> bool {
        self == Status::Good
    }
}
