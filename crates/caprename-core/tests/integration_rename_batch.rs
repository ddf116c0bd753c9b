//! Integration test: full batch rename into a real zip archive.
//!
//! Uses a deterministic stub captioner so no model runtime is involved,
//! writes the archive to a tempdir, and reads it back to verify entry names
//! and contents.

use caprename_core::archive::ZipArchiveWriter;
use caprename_core::batch::run_batch;
use caprename_core::captioner::Captioner;
use caprename_core::config::ExtensionPolicy;
use caprename_core::slug::SlugPolicy;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

struct StubCaptioner(HashMap<PathBuf, &'static str>);

impl Captioner for StubCaptioner {
    fn caption(&self, image: &Path) -> anyhow::Result<String> {
        match self.0.get(image) {
            Some(c) => Ok((*c).to_string()),
            None => anyhow::bail!("no caption for {}", image.display()),
        }
    }
}

fn write_image(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let p = dir.join(name);
    std::fs::write(&p, bytes).unwrap();
    p
}

#[test]
fn batch_renames_into_zip_with_unique_names() {
    let dir = tempdir().unwrap();
    let images = vec![
        write_image(dir.path(), "upload_1.png", b"png one"),
        write_image(dir.path(), "upload_2.png", b"png two"),
        write_image(dir.path(), "upload_3.jpg", b"jpg three"),
    ];
    let captioner = StubCaptioner(
        images
            .iter()
            .cloned()
            .zip([
                "a red dragon on a shirt",
                "a red dragon on a shirt",
                "blue wave",
            ])
            .collect(),
    );

    let zip_path = dir.path().join("renamed.zip");
    let mut archive = ZipArchiveWriter::new(File::create(&zip_path).unwrap());
    let report = run_batch(
        &images,
        &captioner,
        &mut archive,
        &SlugPolicy::default(),
        ExtensionPolicy::Preserve,
    )
    .expect("run_batch");

    let names: Vec<_> = report
        .renamed
        .iter()
        .map(|r| r.final_name.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "red_dragon_shirt.png",
            "red_dragon_shirt_1.png",
            "blue_wave.jpg"
        ]
    );
    assert!(report.failed.is_empty());

    let mut reader = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
    assert_eq!(reader.len(), 3);
    let mut bytes = Vec::new();
    reader
        .by_name("red_dragon_shirt_1.png")
        .unwrap()
        .read_to_end(&mut bytes)
        .unwrap();
    assert_eq!(bytes, b"png two");
}

#[test]
fn failed_caption_skips_item_but_archive_still_completes() {
    let dir = tempdir().unwrap();
    let images = vec![
        write_image(dir.path(), "first.png", b"one"),
        write_image(dir.path(), "second.png", b"two"),
    ];
    // Only the second image has a caption.
    let captioner = StubCaptioner(
        [(images[1].clone(), "lonely cactus at sunset")]
            .into_iter()
            .collect(),
    );

    let zip_path = dir.path().join("renamed.zip");
    let mut archive = ZipArchiveWriter::new(File::create(&zip_path).unwrap());
    let report = run_batch(
        &images,
        &captioner,
        &mut archive,
        &SlugPolicy::default(),
        ExtensionPolicy::ForcePng,
    )
    .expect("run_batch");

    assert_eq!(report.renamed.len(), 1);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].source, images[0]);

    let mut reader = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
    assert_eq!(reader.len(), 1);
    assert!(reader.by_name("lonely_cactus_sunset.png").is_ok());
}
