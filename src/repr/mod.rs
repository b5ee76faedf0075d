/*!
# Graph Representations

Storage backends implementing the traits of [`crate::ops`].
Currently this is the dense, weighted adjacency matrix [`MatrixDigraph`].
*/

use crate::{ops::*, *};

mod matrix;

pub use matrix::*;
