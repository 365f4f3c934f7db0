//! Property tests over randomly generated expression trees
