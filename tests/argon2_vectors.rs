use hashforge::derivation::argon2::{Algorithm, Argon2, Params, Version};

fn expect_tag(params: Params, password: &[u8], expected: &[u8]) {
    let got = Argon2::new(params.clone())
        .derive(password, expected.len())
        .unwrap();

    assert_eq!(
        got, expected,
        "Tag mismatch for {:?}\nExpected {:02x?}\nGot      {:02x?}",
        params, expected, got,
    );
}

// -------------------------------------------------------
// RFC 9106 §5 TEST VECTORS
// -------------------------------------------------------
//
//   password: 32 bytes of 0x01
//   salt: 16 bytes of 0x02
//   secret: 8 bytes of 0x03
//   associated data: 12 bytes of 0x04
//   memory: 32 KiB, passes: 3, lanes: 4, tag length: 32, version: 0x13

fn rfc9106_params(algorithm: Algorithm) -> Params {
    let mut params = Params::new(algorithm, 32, 3, 4, &[0x02; 16]);
    params.secret = vec![0x03; 8].into();
    params.associated_data = vec![0x04; 12].into();
    params
}

#[test]
fn argon2d_rfc9106_test_vector() {
    let expected = [
        0x51, 0x2b, 0x39, 0x1b, 0x6f, 0x11, 0x62, 0x97, 0x53, 0x71, 0xd3, 0x09, 0x19, 0x73, 0x42,
        0x94, 0xf8, 0x68, 0xe3, 0xbe, 0x39, 0x84, 0xf3, 0xc1, 0xa1, 0x3a, 0x4d, 0xb9, 0xfa, 0xbe,
        0x4a, 0xcb,
    ];

    expect_tag(rfc9106_params(Algorithm::Argon2d), &[0x01; 32], &expected);
}

#[test]
fn argon2i_rfc9106_test_vector() {
    let expected = [
        0xc8, 0x14, 0xd9, 0xd1, 0xdc, 0x7f, 0x37, 0xaa, 0x13, 0xf0, 0xd7, 0x7f, 0x24, 0x94, 0xbd,
        0xa1, 0xc8, 0xde, 0x6b, 0x01, 0x6d, 0xd3, 0x88, 0xd2, 0x99, 0x52, 0xa4, 0xc4, 0x67, 0x2b,
        0x6c, 0xe8,
    ];

    expect_tag(rfc9106_params(Algorithm::Argon2i), &[0x01; 32], &expected);
}

#[test]
fn argon2id_rfc9106_test_vector() {
    let expected = [
        0x0d, 0x64, 0x0d, 0xf5, 0x8d, 0x78, 0x76, 0x6c, 0x08, 0xc0, 0x37, 0xa3, 0x4a, 0x8b, 0x53,
        0xc9, 0xd0, 0x1e, 0xf0, 0x45, 0x2d, 0x75, 0xb6, 0x5e, 0xb5, 0x25, 0x20, 0xe9, 0x6b, 0x01,
        0xe6, 0x59,
    ];

    expect_tag(rfc9106_params(Algorithm::Argon2id), &[0x01; 32], &expected);
}

// -------------------------------------------------------
// REFERENCE IMPLEMENTATION VECTORS
// -------------------------------------------------------
//
//   password: "password", salt: "somesalt"
//   memory: 256 KiB, passes: 2, tag length: 32

fn reference_params(algorithm: Algorithm, version: Version, lanes: u32) -> Params {
    let mut params = Params::new(algorithm, 256, 2, lanes, b"somesalt");
    params.version = version;
    params
}

#[test]
fn argon2i_v13_single_lane() {
    let expected = [
        0x89, 0xe9, 0x02, 0x9f, 0x46, 0x37, 0xb2, 0x95, 0xbe, 0xb0, 0x27, 0x05, 0x6a, 0x73, 0x36,
        0xc4, 0x14, 0xfa, 0xdd, 0x43, 0xf6, 0xb2, 0x08, 0x64, 0x52, 0x81, 0xcb, 0x21, 0x4a, 0x56,
        0x45, 0x2f,
    ];

    expect_tag(
        reference_params(Algorithm::Argon2i, Version::V0x13, 1),
        b"password",
        &expected,
    );
}

#[test]
fn argon2i_v13_two_lanes() {
    let expected = [
        0x4f, 0xf5, 0xce, 0x27, 0x69, 0xa1, 0xd7, 0xf4, 0xc8, 0xa4, 0x91, 0xdf, 0x09, 0xd4, 0x1a,
        0x9f, 0xbe, 0x90, 0xe5, 0xeb, 0x02, 0x15, 0x5a, 0x13, 0xe4, 0xc0, 0x1e, 0x20, 0xcd, 0x4e,
        0xab, 0x61,
    ];

    expect_tag(
        reference_params(Algorithm::Argon2i, Version::V0x13, 2),
        b"password",
        &expected,
    );
}

#[test]
fn argon2i_v10_single_lane() {
    let expected = [
        0xfd, 0x4d, 0xd8, 0x3d, 0x76, 0x2c, 0x49, 0xbd, 0xea, 0xf5, 0x7c, 0x47, 0xbd, 0xcd, 0x0c,
        0x2f, 0x1b, 0xab, 0xf8, 0x63, 0xfd, 0xeb, 0x49, 0x0d, 0xf6, 0x3e, 0xde, 0x99, 0x75, 0xfc,
        0xcf, 0x06,
    ];

    expect_tag(
        reference_params(Algorithm::Argon2i, Version::V0x10, 1),
        b"password",
        &expected,
    );
}

#[test]
fn argon2i_v10_two_lanes() {
    let expected = [
        0xb6, 0xc1, 0x15, 0x60, 0xa6, 0xa9, 0xd6, 0x1e, 0xac, 0x70, 0x6b, 0x79, 0xa2, 0xf9, 0x7d,
        0x68, 0xb4, 0x46, 0x3a, 0xa3, 0xad, 0x87, 0xe0, 0x0c, 0x07, 0xe2, 0xb0, 0x1e, 0x90, 0xc5,
        0x64, 0xfb,
    ];

    expect_tag(
        reference_params(Algorithm::Argon2i, Version::V0x10, 2),
        b"password",
        &expected,
    );
}

#[test]
fn argon2id_v13_single_lane() {
    let expected = [
        0x9d, 0xfe, 0xb9, 0x10, 0xe8, 0x0b, 0xad, 0x03, 0x11, 0xfe, 0xe2, 0x0f, 0x9c, 0x0e, 0x2b,
        0x12, 0xc1, 0x79, 0x87, 0xb4, 0xca, 0xc9, 0x0c, 0x2e, 0xf5, 0x4d, 0x5b, 0x30, 0x21, 0xc6,
        0x8b, 0xfe,
    ];

    expect_tag(
        reference_params(Algorithm::Argon2id, Version::V0x13, 1),
        b"password",
        &expected,
    );
}

#[test]
fn argon2id_v13_two_lanes() {
    let expected = [
        0x6d, 0x09, 0x3c, 0x50, 0x1f, 0xd5, 0x99, 0x96, 0x45, 0xe0, 0xea, 0x3b, 0xf6, 0x20, 0xd7,
        0xb8, 0xbe, 0x7f, 0xd2, 0xdb, 0x59, 0xc2, 0x0d, 0x9f, 0xff, 0x95, 0x39, 0xda, 0x2b, 0xf5,
        0x70, 0x37,
    ];

    expect_tag(
        reference_params(Algorithm::Argon2id, Version::V0x13, 2),
        b"password",
        &expected,
    );
}

// -------------------------------------------------------
// REGRESSION VECTORS (32 KiB, 3 passes, 4 lanes)
// -------------------------------------------------------

fn small_params(algorithm: Algorithm) -> Params {
    Params::new(algorithm, 32, 3, 4, b"somesalt")
}

#[test]
fn argon2d_small_memory() {
    let expected = [
        0xd8, 0xc5, 0x4d, 0x62, 0x83, 0xca, 0x2d, 0xc1, 0x48, 0x42, 0xa8, 0x50, 0x9d, 0x7c, 0x84,
        0xb9, 0x18, 0x9b, 0x76, 0x29, 0x35, 0x60, 0xd7, 0xc4, 0x77, 0x5b, 0x2d, 0x1f, 0x0d, 0x69,
        0xa9, 0x68,
    ];

    expect_tag(small_params(Algorithm::Argon2d), b"password", &expected);
}

#[test]
fn argon2d_v10_small_memory() {
    let expected = [
        0xc0, 0x3e, 0x6e, 0xa3, 0x88, 0xe8, 0xb2, 0x06, 0xee, 0x78, 0x73, 0x53, 0xee, 0xbf, 0x62,
        0x25, 0xf4, 0xa4, 0x87, 0x54, 0x69, 0x52, 0xf0, 0xfc, 0xa2, 0xa7, 0x6e, 0xfb, 0x0a, 0xb3,
        0xd8, 0xae,
    ];

    let mut params = small_params(Algorithm::Argon2d);
    params.version = Version::V0x10;
    expect_tag(params, b"password", &expected);
}

#[test]
fn argon2i_small_memory() {
    let expected = [
        0xbd, 0x75, 0x49, 0x19, 0x7d, 0x33, 0x03, 0x19, 0x95, 0x4b, 0x40, 0xc5, 0xf4, 0xfa, 0x0f,
        0xfe, 0x79, 0x8c, 0xa0, 0x71, 0x33, 0x1c, 0xec, 0xb2, 0x82, 0xec, 0x20, 0x20, 0x86, 0x85,
        0x0c, 0xa8,
    ];

    expect_tag(small_params(Algorithm::Argon2i), b"password", &expected);
}

#[test]
fn argon2id_small_memory() {
    let expected = [
        0xbb, 0x0c, 0xc8, 0x0a, 0x3e, 0x67, 0x11, 0x49, 0x52, 0x69, 0x15, 0x41, 0x8c, 0x6e, 0xef,
        0xe7, 0x61, 0xbb, 0x19, 0xd5, 0xd2, 0xd5, 0x67, 0xa0, 0x17, 0x70, 0x3e, 0x0c, 0xea, 0x6a,
        0xb0, 0x5c,
    ];

    expect_tag(small_params(Algorithm::Argon2id), b"password", &expected);
}

#[test]
fn argon2id_minimum_tag_length() {
    let expected = [0x7e, 0x31, 0x21, 0x76];

    expect_tag(small_params(Algorithm::Argon2id), b"password", &expected);
}

#[test]
fn argon2id_tag_just_above_half_digest() {
    let expected = [
        0xe4, 0xb0, 0xd9, 0xf1, 0x25, 0xd7, 0x89, 0xfd, 0x07, 0xaa, 0x98, 0x4c, 0x56, 0x8c, 0x0b,
        0x01, 0x2e, 0x49, 0x78, 0x3b, 0xfa, 0xa6, 0xdc, 0x4e, 0x80, 0xdb, 0x6c, 0x76, 0xe5, 0x0f,
        0x0a, 0xbb, 0x28,
    ];

    expect_tag(small_params(Algorithm::Argon2id), b"password", &expected);
}

#[test]
fn argon2id_tag_just_above_full_digest() {
    let expected = [
        0x68, 0xba, 0x87, 0x56, 0xee, 0x2b, 0xce, 0x34, 0xd6, 0x59, 0x7d, 0x50, 0x33, 0xda, 0xab,
        0x94, 0xf8, 0xf4, 0x64, 0x2f, 0xcd, 0x2a, 0x61, 0xbb, 0x2c, 0xca, 0xf8, 0xac, 0xd4, 0xf2,
        0xfc, 0x79, 0xca, 0x08, 0x38, 0xf1, 0x82, 0xcd, 0x96, 0x85, 0xbb, 0xa4, 0xc6, 0xf5, 0x25,
        0x93, 0xde, 0xed, 0x97, 0xc9, 0x6e, 0x84, 0x96, 0xd3, 0xbe, 0x21, 0x1d, 0x33, 0x55, 0x57,
        0xe9, 0x42, 0x26, 0x43, 0x72,
    ];

    expect_tag(small_params(Algorithm::Argon2id), b"password", &expected);
}
