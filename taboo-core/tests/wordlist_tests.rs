// taboo-core/tests/wordlist_tests.rs
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

use taboo_core::{censor_message, load_wordlist, TabooError};

#[test]
fn test_load_wordlist_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    write!(file, "heck,darn\nbad word,,gosh\n,\n")?;

    let terms = load_wordlist(file.path())?;
    assert_eq!(terms.as_slice(), ["heck", "darn", "bad word", "gosh"]);
    Ok(())
}

#[test]
fn test_loaded_list_drives_censoring() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "bad word")?;
    writeln!(file, "heck")?;

    let terms = load_wordlist(file.path())?;
    let censored = censor_message("That's a bad word and a heck of a day", &terms)?;
    assert_eq!(censored, "That's a ******** and a **** of a day");
    Ok(())
}

#[test]
fn test_missing_file_is_resource_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let missing = dir.path().join("nope.csv");

    match load_wordlist(&missing) {
        Err(TabooError::ResourceNotFound { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected ResourceNotFound, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_invalid_utf8_is_malformed_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"heck\n\xc3\x28,darn\n")?;

    let err = load_wordlist(file.path()).unwrap_err();
    assert!(matches!(err, TabooError::MalformedInput { .. }), "got {err:?}");
    assert!(err.to_string().contains("malformed"));
    Ok(())
}

#[test]
fn test_empty_file_loads_empty_list() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new()?;
    let terms = load_wordlist(file.path())?;
    assert!(terms.is_empty());
    assert_eq!(censor_message("heck", &terms)?, "heck");
    Ok(())
}
