pub mod misuse;
