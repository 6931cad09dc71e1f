//! # epg-format
//!
//! The document formats around [`epg_engine`]: XMLTV source feeds in, a CSV
//! channel allow-list, and one XML schedule document per channel out.
//!
//! ## Quick start
//!
//! ```rust
//! use epg_engine::{reconcile_lineup, ReconcileOptions};
//! use epg_format::{decode_feed, encode_schedule, read_channels};
//!
//! let feed = decode_feed(r#"<tv>
//!   <programme start="20170701080000 +0300" stop="20170701100000 +0300" channel="Alfa">
//!     <title lang="bg">Добро утро, българи</title>
//!   </programme>
//! </tv>"#).unwrap();
//! let channels = read_channels("101,Alfa\n".as_bytes()).unwrap();
//!
//! let schedules =
//!     reconcile_lineup(&channels, &feed.programmes, &ReconcileOptions::default()).unwrap();
//! let xml = encode_schedule(&schedules[0]).unwrap();
//! assert!(xml.contains("<time_from>2017-07-01T05:00:00Z</time_from>"));
//! ```
//!
//! ## Modules
//!
//! - [`decoder`] — XMLTV text → [`Feed`]
//! - [`channels`] — CSV allow-list → `Vec<ChannelRef>`
//! - [`feeds`] — which feed files to read, in authority order
//! - [`encoder`] — `ChannelSchedule` → XML document / file
//! - [`error`] — error types

pub mod channels;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod feeds;

pub use channels::{read_channels, read_channels_file};
pub use decoder::{decode_feed, decode_feed_file, Feed, FeedChannel};
pub use encoder::{encode_schedule, schedule_file_name, write_schedule};
pub use error::FormatError;
pub use feeds::{discover_feeds, select_feeds};
