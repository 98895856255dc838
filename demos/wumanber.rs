use hashskip::{HashedSkipList, SkipListConfig};

// usage: cargo run --example wumanber [config.json]
fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).unwrap_or_else(|err| {
                eprintln!("cannot read {}: {}", path, err);
                std::process::exit(1);
            });
            SkipListConfig::from_json(&json).unwrap_or_else(|err| {
                eprintln!("{}", err);
                std::process::exit(1);
            })
        }
        None => SkipListConfig::new(10, 3),
    };

    let mut dict = match HashedSkipList::with_config(config) {
        Ok(dict) => dict,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    for pattern in ["algorithm", "alligator", "alternative", "alfabet"] {
        dict.insert(pattern);
    }

    dict.retune();

    if dict.contains("alfabet") {
        println!("string: alfabet");
    }
    println!("{:?} patterns, height {}", dict.len(), dict.current_level());
}
