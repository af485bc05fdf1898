//! End-to-end tests: data directory to container file and back.

use dlc::binary::{self, ContainerReader};
use dlc::{BuildConfig, CompiledContainer, Container, Error, Matcher, Registry, SiteGroup};
use std::fs;
use std::path::Path;

fn write_list(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_example_registry_end_to_end() {
    let data = tempfile::tempdir().unwrap();
    write_list(data.path(), "a", "example.com\ninclude:b\n");
    write_list(data.path(), "b", "keyword:ads\n");

    let out = tempfile::tempdir().unwrap();
    let config = BuildConfig {
        data_dir: Some(data.path().to_path_buf()),
        output: out.path().join("dlc.dat"),
        ..Default::default()
    };

    let summary = dlc::run(&config).unwrap();
    assert_eq!(summary.group_count, 2);
    assert_eq!(summary.matcher_count, 3);
    assert!(summary.checksum.is_none());

    let container = ContainerReader::open(&config.output)
        .unwrap()
        .into_container();
    assert_eq!(
        container,
        Container::new(vec![
            SiteGroup::new(
                "A",
                vec![
                    Matcher::Plain("example.com".into()),
                    Matcher::Substring("ads".into())
                ]
            ),
            SiteGroup::new("B", vec![Matcher::Substring("ads".into())]),
        ])
    );
}

#[test]
fn test_round_trip_of_realistic_lists() {
    let data = tempfile::tempdir().unwrap();
    write_list(
        data.path(),
        "google",
        "# Google\ngoogle.com\nfull:www.google.com\nkeyword:googleapis\ninclude:youtube\n",
    );
    write_list(data.path(), "youtube", "youtube.com\nregex:^yt[0-9]+\\.ggpht\\.com$\n");
    write_list(
        data.path(),
        "geolocation-!cn",
        "include:google\ninclude:youtube\n",
    );

    let registry = Registry::load_dir(data.path()).unwrap();
    let container = dlc::build(&registry).unwrap();
    let bytes = binary::serialize(&container).unwrap();

    assert_eq!(binary::decode(&bytes).unwrap(), container);

    let names: Vec<&str> = container.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["GEOLOCATION-!CN", "GOOGLE", "YOUTUBE"]);

    // youtube is already pulled in through google
    assert_eq!(
        container.get("geolocation-!cn").unwrap().matchers.len(),
        container.get("google").unwrap().matchers.len()
    );
}

#[test]
fn test_build_is_reproducible() {
    let data = tempfile::tempdir().unwrap();
    for i in 0..20 {
        write_list(
            data.path(),
            &format!("list{}", i),
            &format!("site{}.com\ninclude:common\n", i),
        );
    }
    write_list(data.path(), "common", "full:cdn.example.com\n");

    let registry = Registry::load_dir(data.path()).unwrap();
    let first = binary::serialize(&dlc::build(&registry).unwrap()).unwrap();
    let second = binary::serialize(&dlc::build(&registry).unwrap()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_cycle_aborts_without_output() {
    let data = tempfile::tempdir().unwrap();
    write_list(data.path(), "a", "a.com\ninclude:b\n");
    write_list(data.path(), "b", "b.com\ninclude:a\n");

    let out = tempfile::tempdir().unwrap();
    let config = BuildConfig {
        data_dir: Some(data.path().to_path_buf()),
        output: out.path().join("dlc.dat"),
        ..Default::default()
    };

    assert!(matches!(
        dlc::run(&config),
        Err(Error::CircularInclusion(_))
    ));
    assert!(!config.output.exists());
}

#[test]
fn test_unresolved_include_aborts() {
    let data = tempfile::tempdir().unwrap();
    write_list(data.path(), "a", "include:b\n");

    let registry = Registry::load_dir(data.path()).unwrap();
    assert!(matches!(
        dlc::build(&registry),
        Err(Error::UnresolvedInclude { ref name, .. }) if name == "B"
    ));
}

#[test]
fn test_malformed_line_aborts_load() {
    let data = tempfile::tempdir().unwrap();
    write_list(data.path(), "bad", "ok.com\nfull:a:b\n");

    assert!(matches!(
        Registry::load_dir(data.path()),
        Err(Error::MalformedEntryLine { line_number: 2, .. })
    ));
}

#[test]
fn test_gzip_and_checksum_outputs() {
    let data = tempfile::tempdir().unwrap();
    write_list(data.path(), "ads", "keyword:ads\nregex:^ad[0-9]+\\.\n");

    let out = tempfile::tempdir().unwrap();
    let config = BuildConfig {
        data_dir: Some(data.path().to_path_buf()),
        output: out.path().join("dlc.dat.gz"),
        checksum: true,
        gzip: true,
    };

    let summary = dlc::run(&config).unwrap();
    let written = fs::read(&config.output).unwrap();
    assert!(binary::is_gzip(&written));

    let digest = summary.checksum.unwrap();
    assert_eq!(digest, binary::checksum(&written));
    let sidecar = fs::read_to_string(out.path().join("dlc.dat.gz.sha256sum")).unwrap();
    assert_eq!(sidecar, format!("{}  dlc.dat.gz\n", digest));

    let compiled = CompiledContainer::compile(
        ContainerReader::open(&config.output).unwrap().container(),
    )
    .unwrap();
    assert_eq!(compiled.lookup("ad3.example.com"), vec!["ADS"]);
    assert_eq!(compiled.lookup("myads.net"), vec!["ADS"]);
    assert!(compiled.lookup("example.com").is_empty());
}
