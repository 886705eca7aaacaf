/// IQE export command.
pub mod iqe;
/// File-level information command.
pub mod info;

mod util;
