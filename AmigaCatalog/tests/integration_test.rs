use amiga_catalog::catalog::catalog_relative_path;
use amiga_catalog::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Builds `FORM CTLG` containers for tests
#[derive(Default)]
struct CatalogBuilder {
    chunks: Vec<u8>,
}

impl CatalogBuilder {
    fn chunk(mut self, tag: &[u8; 4], payload: &[u8]) -> Self {
        self.chunks.extend_from_slice(tag);
        self.chunks
            .extend_from_slice(&(payload.len() as u32).to_be_bytes());
        self.chunks.extend_from_slice(payload);
        if payload.len() % 2 == 1 {
            self.chunks.push(0);
        }
        self
    }

    fn strings(self, entries: &[(i32, &[u8])]) -> Self {
        let mut strs = Vec::new();
        for (id, text) in entries {
            strs.extend_from_slice(&id.to_be_bytes());
            strs.extend_from_slice(&(text.len() as u32).to_be_bytes());
            strs.extend_from_slice(text);
            while strs.len() % 4 != 0 {
                strs.push(0);
            }
        }
        self.chunk(b"STRS", &strs)
    }

    fn build(self) -> Vec<u8> {
        let mut out = b"FORM".to_vec();
        out.extend_from_slice(&((self.chunks.len() + 4) as u32).to_be_bytes());
        out.extend_from_slice(b"CTLG");
        out.extend_from_slice(&self.chunks);
        out
    }
}

fn sample_catalog(quit: &[u8]) -> Vec<u8> {
    CatalogBuilder::default()
        .chunk(b"FVER", b"$VER: demo.catalog 1.0 (16.10.26)\0")
        .chunk(b"LANG", b"deutsch\0")
        .chunk(b"CSET", &[0u8; 32])
        .strings(&[(0, &b"Projekt"[..]), (1, &b"O\0\xd6ffnen..."[..]), (2, quit)])
        .build()
}

fn write_catalog(root: &Path, signature: &str, language: &str, data: &[u8]) -> PathBuf {
    let path = root.join(catalog_relative_path(signature, language));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, data).unwrap();
    path
}

fn roots_in(base: &Path) -> SearchRoots {
    SearchRoots {
        app_dir: Some(base.join("app")),
        user_dir: Some(base.join("user")),
        system_dir: Some(base.join("system")),
    }
}

#[test]
fn test_decode_sample() {
    let record = parse_catalog_bytes(&sample_catalog(b"Beenden")).unwrap();

    assert_eq!(record.signature.as_deref(), Some("$VER: demo.catalog 1.0 (16.10.26)"));
    assert_eq!(record.language_name.as_deref(), Some("deutsch"));
    assert_eq!(
        record.entries,
        vec![
            CatalogEntry { id: 0, text: "Projekt".into() },
            CatalogEntry { id: 1, text: "Öffnen...".into() },
            CatalogEntry { id: 2, text: "Beenden".into() },
        ]
    );
}

#[test]
fn test_unknown_chunks_ignored() {
    let data = CatalogBuilder::default()
        .chunk(b"XYZW", b"odd")
        .strings(&[(5, &b"five"[..])])
        .chunk(b"ANNO", b"made by hand")
        .build();

    let record = parse_catalog_bytes(&data).unwrap();
    assert_eq!(record.get(5), Some("five"));
}

#[test]
fn test_duplicate_ids_last_wins() {
    let data = CatalogBuilder::default()
        .strings(&[(1, &b"first"[..]), (2, &b"two"[..]), (1, &b"second"[..])])
        .build();

    let mut catalog = create_catalog("demo", "english");
    catalog.read_from_bytes(&data).unwrap();

    assert_eq!(catalog.table().len(), 2);
    assert_eq!(catalog.get_string(1), Some("second"));
}

#[test]
fn test_fingerprint_deterministic() {
    let dir = tempdir().unwrap();
    let roots = roots_in(dir.path());
    write_catalog(&dir.path().join("app"), "demo", "deutsch", &sample_catalog(b"Beenden"));

    let a = instantiate_catalog_in(&roots, "demo", "deutsch", 0).unwrap();
    let b = instantiate_catalog_in(&roots, "demo", "deutsch", 0).unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(a.fingerprint(), 0);

    let mut c = create_catalog("demo", "deutsch");
    c.read_from_bytes(&sample_catalog(b"Ende")).unwrap();
    assert_ne!(a.fingerprint(), c.fingerprint());
}

#[test]
fn test_app_catalog_wins() {
    let dir = tempdir().unwrap();
    let roots = roots_in(dir.path());
    let app = write_catalog(&dir.path().join("app"), "demo", "deutsch", &sample_catalog(b"App"));
    write_catalog(&dir.path().join("system"), "demo", "deutsch", &sample_catalog(b"System"));

    let catalog = instantiate_catalog_in(&roots, "demo", "deutsch", 0).unwrap();
    assert_eq!(catalog.get_string(2), Some("App"));
    assert_eq!(catalog.path(), Some(app.as_path()));
}

#[test]
fn test_fallback_after_malformed_candidate() {
    let dir = tempdir().unwrap();
    let roots = roots_in(dir.path());

    let mut broken = sample_catalog(b"Broken");
    broken[..4].copy_from_slice(b"LIST");
    write_catalog(&dir.path().join("app"), "demo", "deutsch", &broken);
    let user = write_catalog(&dir.path().join("user"), "demo", "deutsch", &sample_catalog(b"User"));

    let catalog = AmigaCatalog::open("demo", "deutsch", 0, &roots);
    assert!(catalog.init_check().is_ok());
    assert_eq!(catalog.get_string(2), Some("User"));
    assert_eq!(catalog.path(), Some(user.as_path()));
    // Nothing from the rejected file leaked into the table
    assert_eq!(catalog.table().len(), 3);
}

#[test]
fn test_all_candidates_fail() {
    let dir = tempdir().unwrap();
    let roots = roots_in(dir.path());

    let catalog = AmigaCatalog::open("demo", "deutsch", 42, &roots);
    assert!(matches!(catalog.init_check(), Err(Error::NotFound(_))));
    assert_eq!(catalog.fingerprint(), 42);

    let mut truncated = sample_catalog(b"Beenden");
    truncated.truncate(20);
    write_catalog(&dir.path().join("system"), "demo", "deutsch", &truncated);

    let catalog = AmigaCatalog::open("demo", "deutsch", 0, &roots);
    assert!(matches!(catalog.init_check(), Err(Error::Truncated { .. })));
    assert!(catalog.table().is_empty());
    assert!(instantiate_catalog_in(&roots, "demo", "deutsch", 0).is_none());
}

#[test]
fn test_wrong_form_type_falls_through() {
    let dir = tempdir().unwrap();
    let roots = roots_in(dir.path());

    let mut picture = sample_catalog(b"Beenden");
    picture[8..12].copy_from_slice(b"ILBM");
    write_catalog(&dir.path().join("user"), "demo", "deutsch", &picture);

    let catalog = AmigaCatalog::open("demo", "deutsch", 0, &roots);
    assert!(matches!(
        catalog.init_check(),
        Err(Error::UnsupportedFormType(_))
    ));
}

#[test]
fn test_write_leaves_file_and_catalog_unchanged() {
    let dir = tempdir().unwrap();
    let roots = roots_in(dir.path());
    let data = sample_catalog(b"Beenden");
    let path = write_catalog(&dir.path().join("app"), "demo", "deutsch", &data);

    let catalog = instantiate_catalog_in(&roots, "demo", "deutsch", 0).unwrap();
    let fingerprint = catalog.fingerprint();

    assert!(matches!(catalog.write_to_file(None), Err(Error::WriteUnsupported)));
    assert!(matches!(
        catalog.write_to_file(Some(path.as_path())),
        Err(Error::WriteUnsupported)
    ));

    assert_eq!(fs::read(&path).unwrap(), data);
    assert_eq!(catalog.fingerprint(), fingerprint);
    assert_eq!(catalog.table().len(), 3);
}

#[test]
fn test_reread_bound_file() {
    let dir = tempdir().unwrap();
    let path = write_catalog(dir.path(), "demo", "deutsch", &sample_catalog(b"Beenden"));

    let mut catalog = AmigaCatalog::create(&path, "demo", "deutsch");
    catalog.read_from_file(None).unwrap();
    assert_eq!(catalog.get_string(0), Some("Projekt"));
    assert_eq!(catalog.signature(), "$VER: demo.catalog 1.0 (16.10.26)");

    let mut empty = create_catalog("demo", "deutsch");
    assert!(empty.read_from_file(None).unwrap_err().is_not_found());
}

#[test]
fn test_available_languages() {
    let dir = tempdir().unwrap();
    let roots = roots_in(dir.path());
    let data = sample_catalog(b"Beenden");

    write_catalog(&dir.path().join("app"), "demo", "italiano", &data);
    write_catalog(&dir.path().join("user"), "demo", "deutsch", &data);
    write_catalog(&dir.path().join("system"), "demo", "deutsch", &data);
    write_catalog(&dir.path().join("system"), "demo", "dansk", &data);
    write_catalog(&dir.path().join("system"), "other", "français", &data);

    let languages = available_languages(&roots, "demo").unwrap();
    assert_eq!(languages, vec!["italiano", "deutsch", "dansk"]);
}

#[test]
fn test_roots_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("roots.json");
    fs::write(
        &config,
        format!(
            r#"{{"app_dir": null, "user_dir": {:?}}}"#,
            dir.path().join("user").to_string_lossy()
        ),
    )
    .unwrap();

    let roots = SearchRoots::load(&config).unwrap();
    assert_eq!(roots.app_dir, None);
    assert_eq!(roots.user_dir, Some(dir.path().join("user")));
    assert_eq!(roots.system_dir, None);
}

#[test]
fn test_chunk_listing() {
    let data = sample_catalog(b"Beenden");
    let tags: Vec<ChunkTag> = ChunkReader::new(&data)
        .unwrap()
        .map(|chunk| chunk.unwrap().tag)
        .collect();

    assert_eq!(
        tags,
        vec![ChunkTag::FVER, ChunkTag::LANG, ChunkTag::CSET, ChunkTag::STRS]
    );
}

#[test]
fn test_priority_constant() {
    assert_eq!(CATALOG_ADDON_PRIORITY, 80);
}
