use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use venn3::{driver, RenderConfig, Renderer, SvgRenderer};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_svg_matches_fixture() {
    let job = driver::reference_job();
    let renderer = SvgRenderer::new(RenderConfig::default()).expect("renderer");
    let svg = renderer
        .render_svg(&job.sets(), &job.options().expect("options"))
        .expect("render");

    // The golden stores a digest so the fixture stays small
    let digest = hex::encode(Sha256::digest(svg.as_bytes()));

    let expected_path = golden_path("reference_svg.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    assert!(
        expected_path.exists(),
        "no golden at {:?}; run with UPDATE_GOLDENS=1 to create it",
        expected_path
    );

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim(), "reference SVG changed; rerun with UPDATE_GOLDENS=1 if intended");
}

#[test]
fn golden_region_digest_is_stable_across_runs() {
    let a = driver::reference_job().sets().regions().digest();
    let b = driver::reference_job().sets().regions().digest();
    assert_eq!(a, b);
    assert_eq!(hex::decode(&a).expect("hex digest").len(), 32);
}
