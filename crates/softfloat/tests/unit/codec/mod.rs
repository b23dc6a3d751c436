/// Host double encode/decode.
pub mod float;
