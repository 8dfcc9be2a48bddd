#![cfg(test)]

mod test_utils;
mod canonical_tests;
mod fields_tests;
mod vector_tests;
