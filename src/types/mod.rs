/*!
Types for distinguishing the use of general structures.

For the moment, only [errors](err).
*/

pub mod err;
