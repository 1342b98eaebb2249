use prometheus::{IntCounter, Registry};

pub struct Metrics {
    pub files_transformed: IntCounter,
    pub names_renamed: IntCounter,
    pub strings_encrypted: IntCounter,
}

impl Metrics {
    pub fn new(registry: &Registry) -> Self {
        let files_transformed =
            IntCounter::new("files_transformed", "Number of source files rewritten").unwrap();
        let names_renamed =
            IntCounter::new("names_renamed", "Number of identifier substitutions applied")
                .unwrap();
        let strings_encrypted = IntCounter::new(
            "strings_encrypted",
            "Number of unique string literals moved into decode tables",
        )
        .unwrap();
        registry.register(Box::new(files_transformed.clone())).unwrap();
        registry.register(Box::new(names_renamed.clone())).unwrap();
        registry.register(Box::new(strings_encrypted.clone())).unwrap();
        Self {
            files_transformed,
            names_renamed,
            strings_encrypted,
        }
    }
}
