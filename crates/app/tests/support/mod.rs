#![allow(dead_code)]

use ld_core::clock::FixedClock;
use ld_storage::{KvStore, MemoryKv};
use std::path::PathBuf;
use time::macros::datetime;

pub fn temp_dir(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let dir = base.join(format!("ld_app_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

/// 2026-10-16, mid-morning UTC.
pub fn clock() -> Box<FixedClock> {
    Box::new(FixedClock(datetime!(2026-10-16 09:30 UTC)))
}

pub fn boxed(kv: &MemoryKv) -> Box<dyn KvStore> {
    Box::new(kv.clone())
}

pub fn slot(kv: &MemoryKv, key: &str) -> Option<serde_json::Value> {
    kv.get(key)
        .expect("read slot")
        .map(|raw| serde_json::from_str(&raw).expect("slot holds json"))
}
