//! Полносвязная сеть прямого распространения с обучением по одному примеру
//! (обратное распространение ошибки) и структурным прореживанием графа.

mod activation;
mod connection;
mod error;
mod graph;
mod layer;
mod layer_topology;
mod network;
mod neuron;
mod pruner;

pub use activation::*;
pub use connection::*;
pub use error::*;
pub use graph::*;
pub use layer::*;
pub use layer_topology::*;
pub use network::*;
pub use neuron::*;
pub use pruner::*;

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use tracing::{debug, info};
