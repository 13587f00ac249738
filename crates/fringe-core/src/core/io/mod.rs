//! Export of computed patterns for external plotting tools.

pub mod csv;
