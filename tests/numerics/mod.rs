//! Integration tests for fitting and quadrature


mod quadrature_tests;
