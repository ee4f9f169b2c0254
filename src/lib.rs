//! # Chain Map
//!
//! A Rust implementation of a hash table with separate chaining.
//!
//! This crate provides a single hash map implementation:
//!
//! - `ChainedHashMap`: a single-threaded table mapping string keys to values
//!
//! Keys are hashed with the DJB2 algorithm and reduced onto a bucket by
//! modulo; colliding keys share their bucket as a singly linked chain, so
//! insertion always succeeds. The table grows only when the caller invokes
//! `resize`, which doubles the bucket count and rehashes every entry.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! // Create a new hash map
//! let mut map = ChainedHashMap::new();
//!
//! // Insert values
//! map.insert("apple".to_string(), 1);
//! map.insert("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.insert("apple".to_string(), 10);
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Growing the table
//!
//! The table never resizes on its own. Callers watch the load factor and
//! double the bucket count explicitly:
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::with_capacity(2)?;
//! map.insert("line_1".to_string(), "Tiny hash table");
//! map.insert("line_2".to_string(), "Filled beyond capacity");
//! map.insert("line_3".to_string(), "Linked list saves the day!");
//!
//! // Three entries in two buckets: at least one chain has collided
//! assert!(map.load_factor() > 1.0);
//!
//! map.resize();
//!
//! assert_eq!(map.capacity(), 4);
//! assert_eq!(map.get("line_3"), Some(&"Linked list saves the day!"));
//! # Ok::<(), chainmap::ZeroCapacity>(())
//! ```

/// Module implementing the separate-chaining hash table
mod chained_hashmap;
/// Utility functions and traits for the hash map
mod utils;

pub use chained_hashmap::ChainedHashMap;
pub use chained_hashmap::ZeroCapacity;
pub use utils::HashMapExtensions;
