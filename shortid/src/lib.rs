#![deny(missing_docs)]

//! # Short-ID Codec Library
//!
//! This library turns sequences of signed 64-bit integers into short,
//! obfuscated strings drawn from a configurable alphabet, and decodes those
//! strings back into the exact original integers. It is an *obfuscation*
//! scheme in the Hashids tradition, not encryption: the mapping is reversible
//! by anyone holding the same configuration.
//!
//! ```
//! use shortid::Codec;
//!
//! let codec = Codec::new("great korea", 0, shortid::DEFAULT_ALPHABET)?;
//!
//! let hash = codec.encode(&[1]);
//! assert_eq!(hash, "Vp");
//! assert_eq!(codec.decode(&hash), vec![1]);
//!
//! // Values outside [0, 2^53] are split and flagged, so any i64 round-trips.
//! let hash = codec.encode(&[i64::MAX, -1]);
//! assert_eq!(codec.decode(&hash), vec![i64::MAX, -1]);
//! # Ok::<(), shortid::Error>(())
//! ```

pub mod codec;
pub mod error;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use codec::Codec;
pub use codec::CodecBuilder;
pub use codec::DEFAULT_ALPHABET;
pub use codec::MAX_NUMBER;
pub use error::Error;
