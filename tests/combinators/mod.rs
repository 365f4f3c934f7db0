//! Integration tests for the combinator catalog

// sum, diff, product, ratio, composite
mod compound_tests;

// times-constant, plus-constant, periodic
mod modified_tests;
