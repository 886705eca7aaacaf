//! Public library API for decoding Inter-Quake Model `.iqm` files and exporting them as IQE text.

/// IQM container parsing, frame reconstruction, and IQE export.
pub mod iqm;
