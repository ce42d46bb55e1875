#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

pub const PLACES_CSV: &str = "\
text,name,category,city
historic mughal fort and royal palace with sheesh mahal,Lahore Fort,attraction,lahore
spicy karahi and grilled meat street food,Namak Mandi,food,peshawar
turquoise glacier lake under snowy peaks,Attabad Lake,attraction,hunza
ski resort with chairlift and pine forest,Malam Jabba,attraction,swat
";

/// `travel_bot` running inside `dir` with every setting pointed at local, offline values.
pub fn travel_bot(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("travel_bot").expect("travel_bot binary");
    cmd.current_dir(dir)
        .env_remove("HF_TOKEN")
        .env("RUST_LOG", "off")
        .env("HF_API_URL", "http://127.0.0.1:9/unreachable")
        .env("TRAVEL_RETRY_DELAY_SECS", "0")
        .env("TRAVEL_MAX_RETRIES", "2")
        .env("TRAVEL_DATASET_PATH", dir.join("data.csv"))
        .env("TRAVEL_VECTORIZER_PATH", dir.join("vectorizer.bin"));
    cmd
}
