//! Embedded word pools
//!
//! Category pools compiled into the binary at build time.

// Include generated word pools from build script
include!(concat!(env!("OUT_DIR"), "/animals.rs"));
include!(concat!(env!("OUT_DIR"), "/technology.rs"));
include!(concat!(env!("OUT_DIR"), "/sports.rs"));
include!(concat!(env!("OUT_DIR"), "/food.rs"));
include!(concat!(env!("OUT_DIR"), "/movies.rs"));
include!(concat!(env!("OUT_DIR"), "/programming.rs"));
include!(concat!(env!("OUT_DIR"), "/countries.rs"));
include!(concat!(env!("OUT_DIR"), "/random_words.rs"));
