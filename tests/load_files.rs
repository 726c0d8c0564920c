//! Integration tests for loading assets from disk.

use std::fs;
use std::path::Path;

use scene_assets::bitmap::{self, CubeFace, CubeMap};
use scene_assets::config::AssetConfig;
use scene_assets::geom;
use scene_assets::Error;

fn write_solid_bmp(path: &Path, size: u32, rgb: [u8; 3]) {
    image::RgbImage::from_pixel(size, size, image::Rgb(rgb))
        .save_with_format(path, image::ImageFormat::Bmp)
        .expect("write bmp");
}

#[test]
fn test_load_bitmap_both_ways() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Earth.bmp");
    write_solid_bmp(&path, 3, [10, 20, 30]);

    let mapped = bitmap::load_opts(&path, true).unwrap();
    let read = bitmap::load_opts(&path, false).unwrap();
    assert_eq!(mapped.pixels(), read.pixels());
    assert_eq!(bitmap::load(&path).unwrap().pixel(2, 2), Some([10, 20, 30]));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.bmp");
    let err = bitmap::load(&path).unwrap_err();
    assert!(matches!(err, Error::FileNotFound(ref p) if p == &path));

    assert!(matches!(
        geom::load_obj(dir.path().join("nope.obj")),
        Err(Error::FileNotFound(_))
    ));
}

#[test]
fn test_errors_carry_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ship.obj");
    fs::write(&path, "v 0 0 0\nf 1 1\n").unwrap();

    let err = geom::load_obj(&path).unwrap_err();
    assert_eq!(err.path(), Some(path.as_path()));
    assert!(matches!(err.root(), Error::MalformedMesh { line: 2, .. }));
    assert!(err.to_string().contains("ship.obj"));

    let empty = dir.path().join("empty.bmp");
    fs::write(&empty, b"").unwrap();
    let err = bitmap::load(&empty).unwrap_err();
    assert!(matches!(err.root(), Error::UnsupportedFormat { .. }));
}

#[test]
fn test_load_obj_and_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tri.obj");
    fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
    let mesh = geom::load_obj_opts(&path, false).unwrap();
    assert_eq!(mesh.num_triangles(), 1);

    let bad = dir.path().join("bad.obj");
    fs::write(&bad, [b'v', b' ', 0xFF, 0xFE]).unwrap();
    assert!(matches!(geom::load_obj(&bad).unwrap_err().root(), Error::Utf8(_)));
}

#[test]
fn test_cube_map_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    let names = [
        "nvposx.bmp",
        "nvnegx.bmp",
        "nvposy.bmp",
        "nvnegy.bmp",
        "nvposz.bmp",
        "nvnegz.bmp",
    ];
    for (i, name) in names.iter().enumerate() {
        write_solid_bmp(&dir.path().join(name), 4, [i as u8 * 40, 0, 0]);
    }

    let map = CubeMap::load(dir.path(), names).unwrap();
    assert_eq!(map.size(), 4);
    assert_eq!(map.face(CubeFace::PositiveZ).pixel(0, 0), Some([160, 0, 0]));

    write_solid_bmp(&dir.path().join(names[5]), 8, [0, 0, 0]);
    let err = CubeMap::load(dir.path(), names).unwrap_err();
    assert!(matches!(err.root(), Error::CorruptFile(_)));
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");
    fs::write(
        &path,
        format!(
            r#"{{ "asset_dir": {:?}, "cycle_millis": 20000 }}"#,
            dir.path().display().to_string()
        ),
    )
    .unwrap();

    let config = AssetConfig::load(&path).unwrap();
    assert_eq!(config.clock().unwrap().cycle_millis(), 20_000);
    assert_eq!(config.log_filter, "info");

    write_solid_bmp(&config.resolve("Moon.bmp"), 2, [1, 2, 3]);
    let moon = bitmap::load_opts(config.resolve("Moon.bmp"), config.mmap_enabled()).unwrap();
    assert_eq!(moon.width(), 2);

    fs::write(&path, "not json").unwrap();
    let err = AssetConfig::load(&path).unwrap_err();
    assert!(matches!(err.root(), Error::Config(_)));
    assert!(matches!(
        AssetConfig::load(dir.path().join("missing.json")),
        Err(Error::FileNotFound(_))
    ));
}
