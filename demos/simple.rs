//! Simple standalone example of identifier usage.
//!
//! This example converts an externally supplied UUID into a storage key and
//! back, then mints keys from several threads at once.
//!
//! Run with: cargo run --example simple

use std::sync::Arc;
use std::thread;

use keyspace_id::id::{bytes, structured};
use keyspace_id::{IdGenerator, Identifier};
use uuid::Uuid;

fn main() {
    println!("=== Simple keyspace-id Example ===\n");

    // An upstream system hands us a UUID
    let external = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    let id = structured::decode(external);
    let key = bytes::encode(id);

    println!("External UUID:  {}", external);
    println!("As identifier:  {}", id);
    println!("Storage key:    {:02x?}", key);

    // Reading the key back reproduces the same UUID bytes
    let restored = bytes::decode(Some(&key)).unwrap();
    println!("Restored UUID:  {}", structured::encode(restored));
    assert_eq!(structured::encode(restored), external);

    // Four writers share one generator
    println!("\n--- Concurrent Generation ---");
    let generator = Arc::new(IdGenerator::new());
    let handles: Vec<_> = (0..4)
        .map(|writer| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                let ids: Vec<Identifier> = (0..3).map(|_| generator.create()).collect();
                (writer, ids)
            })
        })
        .collect();

    let mut all = Vec::new();
    for handle in handles {
        let (writer, ids) = handle.join().unwrap();
        for id in &ids {
            println!("  writer {}: {}", writer, id);
        }
        all.extend(ids);
    }

    all.sort();
    all.dedup();
    println!("\n{} unique identifiers, last issued {}", all.len(), generator.last_issued());
}
