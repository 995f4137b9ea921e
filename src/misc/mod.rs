/*!
Miscellaneous items, not part of the core library.
*/

pub mod log;
