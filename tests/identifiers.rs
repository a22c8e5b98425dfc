use std::io::Cursor;

use iscc::{
    c2d, c2i, generate_content_id_text, generate_data_id, generate_data_id_from_reader,
    generate_instance_id, generate_instance_id_from_reader, generate_meta_id, hamming_distance,
    jaccard_similarity, Component, ComponentKind,
};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn distance(a: &str, b: &str) -> u64 {
    hamming_distance(&c2i(a).unwrap(), &c2i(b).unwrap())
}

fn lcg_data(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut state: u32 = 0xDEAD_BEEF;
    for _ in 0..size {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        data.push((state >> 16) as u8);
    }
    data
}

const TITLE: &str = "Die Unendliche Geschichte";

#[test]
fn meta_id_reference() {
    let mid = generate_meta_id(TITLE, "Michael Ende");
    assert_eq!(mid, "AC6AVDTBKWY5Q");
    assert_eq!(mid.len(), 13);
    assert_eq!(c2d(&mid).unwrap()[0], 0x00);
}

#[test]
fn meta_id_creator_variants_collapse() {
    let mid1 = generate_meta_id(TITLE, "Michael Ende");
    assert_eq!(mid1, generate_meta_id(TITLE, "Ende, Michael"));
    assert_eq!(mid1, generate_meta_id("Die Unéndliche Geschichte", "Ende, M."));
    assert_eq!(mid1, generate_meta_id("  die   UNENDLICHE geschichte ", "michael ende"));
}

#[test]
fn meta_id_single_edits_stay_within_five_bits() {
    let mid1 = generate_meta_id(TITLE, "Michael Ende");
    for title in [
        "Die UnXndliche Geschichte",
        "Die nendliche Geschichte",
        "Die UnendlicheX Geschichte",
        "Unendliche Geschichte, Die",
    ] {
        let mid2 = generate_meta_id(title, "Michael Ende");
        let d = distance(&mid1, &mid2);
        assert!(d <= 5, "{title:?} is {d} bits away");
    }
}

#[test]
fn meta_id_multiple_edits_stay_within_eight_bits() {
    let mid1 = generate_meta_id(TITLE, "Michael Ende");
    let mid2 = generate_meta_id("Diex Unandlische Geschiche", "Michael Ende");
    assert!(distance(&mid1, &mid2) <= 8);
}

#[test]
fn meta_id_unrelated_title_is_far() {
    let mid1 = generate_meta_id(TITLE, "Michael Ende");
    let mid2 = generate_meta_id("Now for something different", "");
    assert!(distance(&mid1, &mid2) >= 30);
}

#[test]
fn meta_id_unrelated_title_by_same_creator_is_far() {
    let mid1 = generate_meta_id(TITLE, "Michael Ende");
    let mid2 = generate_meta_id("Now for something different", "Michael Ende");
    assert!(distance(&mid1, &mid2) >= 30);
}

#[test]
fn meta_id_empty_title_is_valid() {
    let mid = generate_meta_id("", "");
    assert_eq!(mid.len(), 13);
    assert_eq!(Component::decode(&mid).unwrap().kind(), ComponentKind::Meta);
}

#[test]
fn content_id_tracks_text_similarity() {
    let a = "The quick brown fox jumps over the lazy dog. It was the best of times, \
             it was the worst of times, it was the age of wisdom, it was the age of \
             foolishness.";
    let b = a.replace("lazy", "sleepy");
    let c = "Call me Ishmael. Some years ago, never mind how long precisely, having \
             little or no money in my purse, and nothing particular to interest me on \
             shore.";

    let ca = generate_content_id_text(a);
    let cb = generate_content_id_text(&b);
    let cc = generate_content_id_text(c);

    assert_eq!(ca, "CD4BKVEYNPCYO");
    assert!(distance(&ca, &cb) < distance(&ca, &cc));
    assert_eq!(Component::decode(&ca).unwrap().kind(), ComponentKind::Content);
}

#[test]
fn data_id_survives_single_byte_insert() {
    let v1 = lcg_data(200_000);
    let mut v2 = v1.clone();
    v2.insert(100_000, b'X');

    let d1 = generate_data_id(&v1);
    let d2 = generate_data_id(&v2);
    assert_eq!(d1, "ECEDI3O727TEK");
    assert!(distance(&d1, &d2) <= 4);
    assert_eq!(d1, generate_data_id_from_reader(Cursor::new(&v1)).unwrap());
}

#[test]
fn instance_id_reference() {
    let iid = generate_instance_id(&[0u8; 16]);
    assert_eq!(c2d(&iid).unwrap()[0], 48);
    assert_eq!(iid, "GAWKP4EYOCOTO");

    let data = lcg_data(200_000);
    assert_eq!(generate_instance_id(&data), "GAYRZBVFKNKUY");
    assert_eq!(
        generate_instance_id_from_reader(Cursor::new(&data)).unwrap(),
        "GAYRZBVFKNKUY"
    );
}

#[test]
fn random_data_edit_moves_data_id_little_and_instance_id_completely() {
    let mut rng = StdRng::seed_from_u64(0x15CC);
    let mut data = vec![0u8; 300_000];
    rng.fill(&mut data[..]);

    let mut edited = data.clone();
    let pos = rng.gen_range(1_000..299_000);
    edited[pos] ^= 0xFF;

    let d = distance(&generate_data_id(&data), &generate_data_id(&edited));
    assert!(d <= 8, "data-id moved {d} bits");
    assert_ne!(generate_instance_id(&data), generate_instance_id(&edited));
    assert_eq!(
        generate_data_id(&data),
        generate_data_id_from_reader(Cursor::new(&data)).unwrap()
    );
}

#[test]
fn codec_helpers() {
    assert_eq!(c2i("AB6YHLNQIJYIM").unwrap(), BigUint::from(35_329_154_098_557_062u64));
    let sim = jaccard_similarity(&BigUint::from(474_169u32), &BigUint::from(474_681u32));
    assert!((sim - 0.916_666_666_666_666_6).abs() < 1e-12);
}
