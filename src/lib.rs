//! # Codebook-Kit: Classical Ciphers
//!
//! `codebook-kit` implements the classical ciphers of cryptography's history
//! behind one consistent API. Only **encryption** is provided.
//!
//! It is an exercise in the algorithms, not a reference for applying any
//! cryptographic technique: every cipher here except the padded RSA primitive
//! is trivially breakable.
//!
//! ## Core Concepts
//!
//! - **Normalization**: plaintext must be lowercase, keys uppercase, cipher
//!   alphabets a permutation of `A..Z`. Inputs are validated into `Plaintext`,
//!   `Key` and `CipherAlphabet` before any cipher runs.
//! - **`ClassicalCipher`**: the trait every classical cipher implements, with an
//!   optional code-group presentation step driven by `OutputConfig`.
//! - **RSA**: the PKCS#1 v1.5 encryption operation over caller-supplied `(n, e)`.
//!
//! ## Quick Start
//!
//! ```rust
//! use codebook_kit::prelude::*;
//!
//! fn main() -> Result<()> {
//!     assert_eq!(caesar("veni vidi vici", 3)?, "YHQLYLGLYLFL");
//!
//!     let grouped = Vigenere::encrypt_with(
//!         "divert troops to east ridge",
//!         "WHITE",
//!         &OutputConfig::default(),
//!     )?;
//!     assert_eq!(grouped, "ZPDXV PAZHS LZBHI WZBKM ZNM");
//!     Ok(())
//! }
//! ```

pub mod asymmetric;
pub mod common;
pub mod substitution;
pub mod transposition;

// --- Errors ---
pub use common::errors::{Error, InputError, Result};

// --- Ciphers ---
pub use substitution::{caesar, keyphrase, playfair, substitute, vigenere};
pub use transposition::{adfgvx, rail_fence, scytale};

#[cfg(feature = "traditional")]
pub use asymmetric::systems::traditional::{RsaPublicNumbers, encrypt_pkcs1v15};

// --- Prelude ---
// A collection of the most commonly used traits, structs, and functions.
pub mod prelude {
    pub use crate::common::{
        CipherAlphabet, ClassicalCipher, Error, InputError, Key, OutputConfig, Plaintext, Result,
        codegroup, keyed_alphabet, normalize_cipher_alphabet, normalize_key,
        normalize_plaintext, shifted_alphabet,
    };
    pub use crate::substitution::{
        Caesar, Generic, Keyphrase, Playfair, Vigenere, caesar, keyphrase, playfair, substitute,
        vigenere,
    };
    pub use crate::transposition::{Adfgvx, RailFence, Scytale, adfgvx, rail_fence, scytale};

    #[cfg(feature = "traditional")]
    pub use crate::asymmetric::systems::traditional::{RsaPublicNumbers, encrypt_pkcs1v15};
}

/// The version of the `codebook-kit` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
