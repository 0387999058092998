//! Fixed completion tables
//!
//! Signal mnemonics for `kill -s` and the single-letter process state codes
//! reported by `ps`. The wording is part of the output contract.

use crate::candidate::Completion;

/// Kill signal names without the `SIG` prefix
pub const KILL_SIGNALS: [(&str, &str); 31] = [
    ("ABRT", "Abnormal termination"),
    ("ALRM", "Virtual alarm clock"),
    ("BUS", "BUS error"),
    ("CHLD", "Child status has changed"),
    ("CONT", "Continue stopped process"),
    ("FPE", "Floating-point exception"),
    ("HUP", "Hangup detected on controlling terminal"),
    ("ILL", "Illegal instruction"),
    ("INT", "Interrupt from keyboard"),
    ("KILL", "Kill, unblockable"),
    ("PIPE", "Broken pipe"),
    ("POLL", "Pollable event occurred"),
    ("PROF", "Profiling alarm clock timer expired"),
    ("PWR", "Power failure restart"),
    ("QUIT", "Quit from keyboard"),
    ("SEGV", "Segmentation violation"),
    ("STKFLT", "Stack fault on coprocessor"),
    ("STOP", "Stop process, unblockable"),
    ("SYS", "Bad system call"),
    ("TERM", "Termination request"),
    ("TRAP", "Trace/breakpoint trap"),
    ("TSTP", "Stop typed at keyboard"),
    ("TTIN", "Background read from tty"),
    ("TTOU", "Background write to tty"),
    ("URG", "Urgent condition on socket"),
    ("USR1", "User-defined signal 1"),
    ("USR2", "User-defined signal 2"),
    ("VTALRM", "Virtual alarm clock"),
    ("WINCH", "Window size change"),
    ("XCPU", "CPU time limit exceeded"),
    ("XFSZ", "File size limit exceeded"),
];

/// Process state codes as printed in the `STAT` column
pub const PROCESS_STATES: [(&str, &str); 9] = [
    ("D", "uninterruptible sleep (usually IO)"),
    ("I", "Idle kernel thread"),
    ("R", "running or runnable (on run queue)"),
    ("S", "interruptible sleep (waiting for an event to complete)"),
    ("T", "stopped by job control signal"),
    ("W", "paging (not valid since the 2.6.xx kernel)"),
    ("X", "dead (should never be seen)"),
    ("Z", "defunct (zombie) process, terminated but not reaped by its parent"),
    ("t", "stopped by debugger during the tracing"),
];

pub fn kill_signals() -> Completion {
    Completion::described(KILL_SIGNALS)
}

pub fn process_states() -> Completion {
    Completion::described(PROCESS_STATES)
}
