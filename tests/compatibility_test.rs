use keysort::core::SortKey;
use keysort::prelude::*;

// Simulate an external record type (like a row from another crate).
// This proves the trait is implementable by "outside crates".
struct Release {
    version: (u16, u16, u16),
    codename: &'static str,
}

impl SortKey for Release {
    type Key = (u16, u16, u16);

    fn sort_key(&self) -> (u16, u16, u16) {
        self.version
    }
}

#[test]
fn test_external_struct_compatibility() {
    let releases = [
        Release { version: (1, 4, 0), codename: "cedar" },
        Release { version: (0, 9, 2), codename: "birch" },
        Release { version: (1, 0, 0), codename: "alder" },
    ];

    let indices = keyed(&releases).indices_by(Release::sort_key);

    // sorted: birch (1), alder (2), cedar (0)
    assert_eq!(indices, vec![1, 2, 0]);
    assert_eq!(releases[indices[0]].codename, "birch");
}

#[test]
fn test_trait_key_through_sorted() {
    let counts = vec![300u64, 100, 200];
    assert_eq!(sorted(&counts), vec![100, 200, 300]);

    let names = vec!["Peter".to_string(), "Claire".to_string(), "John".to_string()];
    assert_eq!(sorted(&names)[0], "Claire");
}
