//! Library pieces of the `ukclean` command-line tool.

pub mod export;
pub mod logging;
