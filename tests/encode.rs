use maxicode::grid::{COLS, FILLER_MODULES, ORIENTATION_MODULES, ROWS};
use maxicode::primary::{EOT, GS, RS};
use maxicode::{encode, Error, HeaderError, MaxiCode, Mode};

fn carrier_message(fields: &[&str]) -> Vec<u8> {
    let mut data = b"[)>".to_vec();
    data.push(RS);
    data.extend_from_slice(b"01");
    for field in fields {
        data.push(GS);
        data.extend_from_slice(field.as_bytes());
    }
    data.extend_from_slice(&[RS, EOT]);
    data
}

fn us_message() -> Vec<u8> {
    carrier_message(&[
        "96841706672", "840", "001", "1Z12345673", "UPSN", "1X2X3X", "187", "", "1/1", "10", "N",
        "19 SOUTH ST", "SALTLAKE CITY", "UT",
    ])
}

fn international_message() -> Vec<u8> {
    carrier_message(&[
        "09651147", "276", "066", "1Z12345677", "UPSN", "1X2X3X", "187", "", "1/1", "10", "N",
        "5 WALDSTRASSE", "COLOGNE", "",
    ])
}

const US_CODEWORDS: [u8; 144] = [
    2, 44, 44, 45, 34, 28, 2, 18, 7, 0, 36, 15, 17, 30, 62, 34, 53, 62, 25, 11, 59, 42, 41, 59,
    40, 30, 48, 49, 29, 57, 54, 49, 26, 49, 50, 51, 52, 53, 54, 55, 51, 29, 21, 16, 19, 14, 29,
    49, 24, 50, 24, 51, 24, 29, 49, 56, 55, 29, 29, 49, 47, 49, 29, 49, 48, 29, 14, 29, 49, 57,
    32, 19, 15, 21, 20, 8, 32, 19, 20, 29, 19, 1, 12, 20, 12, 1, 11, 5, 32, 3, 9, 20, 25, 29, 21,
    20, 30, 62, 4, 33, 33, 33, 33, 33, 20, 23, 35, 30, 55, 33, 60, 62, 22, 9, 30, 57, 7, 29, 51,
    7, 56, 14, 38, 42, 34, 13, 54, 16, 36, 17, 62, 41, 6, 8, 49, 63, 41, 19, 21, 56, 55, 5, 4, 10,
];

const US_GRID: [&str; ROWS] = [
    "XX.X.XXX.XX.XXXXX.XXXXXXX.XXXX",
    ".X.X.X.X.XXX....XX.XX....X..X.",
    "XX.XX.XX...X..X.X.X..XX..XX.X.",
    "XXX...X.X.X.X.XXXXXXXXXXXXXX..",
    "..XXXX....X.XX..X.X.X.X.....X.",
    "X.X..XXX..X.X.XXXX.XX...XX.X..",
    "X.XXX.XXX.X.XXXXXXX.X.XX.XXX.X",
    ".X...X...XXX...XX.XXXX..XX....",
    "...X..XX..X.X...XXX.X.X.XXX.XX",
    "XXX...X.X.XX.X.....XX.XXXXX...",
    "..XXXXXXXXXXXX.......X....XX.X",
    "X.X..XX..X.......X.XX...X.X.X.",
    "XX.XX.XX..........X.XX..X.X.X.",
    ".X....XX...........XXXXXX.X.X.",
    "X...XX.X...........X.XXXX...XX",
    "X.X.X..X............XXX..X....",
    "..XXX...X...........X......X..",
    "XXX...X.X...........X.XX....X.",
    "....X.XX.X...........X.......X",
    "..XXX.X.X.........X...XX...XX.",
    "X.....X...........X..X..X.XXXX",
    "X.X.X...X.X..............X....",
    "XX.XX..X..X..X...XXX.X....X...",
    "X.X...X.X.XXXX.X.XXXXXXX..X.X.",
    "X.X.X.XX...X.X.X.X.XX.X..XX.X.",
    "X.X.XXXXX...........X.X...XX..",
    "X....X.X..X.X.X.X.X...XXXX.X..",
    "..XX..XXX...XXX...X.XXXX.XXXX.",
    "XX.XX...XXX..XXX.XX.XXXX..X...",
    ".X..XXXXX.XXX..XX..X.X..X.XX..",
    ".X.X.X..XXX..XX.XX.X....XXXXX.",
    "X..X..XXX...X...XX.XX..X..XX..",
    ".X.X.XX..X....X..XX..X..X.XX.X",
];

#[test]
fn test_us_carrier_codewords() {
    let data = us_message();
    assert_eq!(data.len(), 94);
    let codewords = MaxiCode::new(Mode::UsCarrier).codewords(&data).unwrap();
    assert_eq!(codewords.as_slice(), &US_CODEWORDS);
}

#[test]
fn test_us_carrier_grid() {
    let grid = encode(2, 0, &us_message()).unwrap();
    for (row, (modules, expected)) in grid.rows().zip(US_GRID).enumerate() {
        let drawn: String = modules.iter().map(|&dark| if dark { 'X' } else { '.' }).collect();
        assert_eq!(drawn, expected, "row {row}");
    }
}

#[test]
fn test_us_carrier_control_characters() {
    // FS and CR inside the message, RS between records
    let mut data = carrier_message(&["96948509751", "840", "988", "1Z28945956", "UPSN", "4X7V81"]);
    data.truncate(data.len() - 2);
    data.push(RS);
    data.extend_from_slice(b"07P\x1c:3 0+\"MY&.M8JMZ*CMB$2-4W#2W6UBTXR/PTKAZ-7H\r");
    data.extend_from_slice(&[RS, EOT]);
    assert_eq!(data.len(), 99);

    let codewords = MaxiCode::new(Mode::UsCarrier).codewords(&data).unwrap();
    assert_eq!(codewords.as_slice(), &[
        50, 13, 28, 36, 8, 30, 2, 18, 51, 61, 12, 2, 14, 9, 28, 34, 4, 39, 45, 39, 59, 42, 41, 59,
        40, 30, 48, 49, 29, 57, 54, 49, 26, 50, 56, 57, 52, 53, 57, 53, 54, 29, 21, 16, 19, 14, 29,
        52, 24, 55, 22, 56, 49, 30, 48, 55, 16, 28, 58, 51, 32, 48, 43, 34, 13, 25, 38, 46, 13, 56,
        10, 13, 26, 42, 3, 13, 2, 36, 50, 45, 52, 23, 35, 50, 23, 54, 21, 2, 20, 24, 18, 47, 16, 20,
        11, 1, 26, 45, 55, 8, 0, 30, 62, 4, 57, 21, 5, 60, 9, 31, 29, 35, 16, 20, 61, 6, 40, 45, 56,
        37, 17, 3, 36, 61, 17, 10, 43, 20, 17, 21, 55, 24, 58, 38, 6, 31, 22, 13, 63, 52, 21, 34,
        14, 5,
    ][..]);
}

#[test]
fn test_international_carrier_codewords() {
    let data = international_message();
    assert_eq!(data.len(), 85);
    assert!(data.ends_with(&[GS, RS, EOT]));

    let codewords = MaxiCode::new(Mode::InternationalCarrier).codewords(&data).unwrap();
    assert_eq!(codewords.as_slice(), &[
        51, 13, 29, 28, 28, 45, 13, 5, 9, 4, 26, 28, 59, 6, 54, 24, 12, 62, 11, 10, 59, 42, 41,
        59, 40, 30, 48, 49, 29, 48, 57, 49, 26, 49, 50, 51, 52, 53, 54, 55, 55, 29, 21, 16, 19, 14,
        29, 49, 24, 50, 24, 51, 24, 29, 49, 56, 55, 29, 29, 49, 47, 49, 29, 49, 48, 29, 14, 29, 53,
        32, 23, 1, 12, 4, 19, 20, 18, 1, 19, 19, 5, 29, 3, 15, 12, 15, 7, 14, 5, 29, 30, 62, 4, 33,
        33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 25, 50, 19, 21, 9, 5, 20, 31, 37, 40, 19, 19, 51,
        16, 59, 26, 28, 4, 55, 42, 50, 17, 40, 62, 60, 7, 36, 25, 6, 9, 37, 8, 1, 59, 42, 13, 33,
        34, 54, 45,
    ][..]);
}

#[test]
fn test_full_ecc_codewords() {
    let codewords = MaxiCode::new(Mode::FullEcc).codewords(b"MAXICODE MODE 5").unwrap();
    assert_eq!(codewords.primary(), &[5, 13, 1, 24, 9, 3, 15, 4, 5, 32]);
    assert_eq!(codewords.primary_ecc(), &[55, 2, 46, 49, 29, 35, 50, 54, 35, 38]);
    assert_eq!(&codewords.secondary()[..6], &[13, 15, 4, 5, 32, 53]);
    assert!(codewords.secondary()[6..68].iter().all(|&c| c == 33));
    assert_eq!(&codewords.secondary()[68..], &[
        40, 18, 8, 39, 57, 31, 41, 32, 45, 33, 37, 35, 9, 52, 29, 48, 55, 25, 14, 8, 62, 8, 43, 25,
        51, 48, 61, 51, 21, 14, 19, 54, 49, 5, 28, 39, 57, 5, 40, 36, 35, 28, 63, 55, 18, 4, 19, 57,
        37, 27, 53, 55, 24, 58, 50, 3,
    ][..]);
}

#[test]
fn test_standard_codewords() {
    let codewords = MaxiCode::new(Mode::Standard).codewords(b"A").unwrap();
    assert_eq!(&codewords.secondary()[84..], &[
        60, 60, 40, 40, 9, 9, 43, 43, 14, 14, 50, 50, 12, 12, 53, 53, 57, 57, 58, 58, 36, 36, 28,
        28, 10, 10, 53, 53, 37, 37, 30, 30, 14, 14, 5, 5, 31, 31, 40, 40,
    ][..]);
}

#[test]
fn test_reader_programming_codewords() {
    let codewords = MaxiCode::new(Mode::ReaderProgramming)
        .codewords(b"reader 123456789012345")
        .unwrap();
    assert_eq!(codewords.primary(), &[6, 63, 18, 5, 1, 4, 5, 18, 57, 32]);
    assert_eq!(&codewords.secondary()[..13], &[49, 50, 31, 20, 38, 42, 16, 53, 63, 50, 51, 52, 53]);
}

#[test]
fn test_eci_shifts_message() {
    let plain = MaxiCode::new(Mode::Standard).codewords(b"ABC").unwrap();
    let eci = MaxiCode::new(Mode::Standard).with_eci(30).codewords(b"ABC").unwrap();
    assert_eq!(&plain.primary()[..4], &[4, 1, 2, 3]);
    assert_eq!(&eci.primary()[..6], &[4, 27, 30, 1, 2, 3]);
    assert_eq!(eci.primary_ecc(), &[46, 12, 45, 44, 3, 41, 20, 9, 11, 52]);
}

#[test]
fn test_deterministic() {
    let data = us_message();
    assert_eq!(encode(2, 0, &data), encode(2, 0, &data));
    assert_eq!(encode(4, 0, b"abc"), encode(4, 0, b"abc"));
}

#[test]
fn test_fixed_modules_always_dark() {
    for (mode, data) in [(4, &b""[..]), (5, &[0u8; 20][..]), (6, &b"\xff\xfe"[..])] {
        let grid = encode(mode, 0, data).unwrap();
        for (row, col) in ORIENTATION_MODULES.into_iter().chain(FILLER_MODULES) {
            assert!(grid.get(row, col), "mode {mode} ({row}, {col})");
        }
        assert_eq!(grid.as_slice().len(), ROWS * COLS);
    }
}

#[test]
fn test_errors() {
    assert_eq!(encode(4, 0, &[b'a'; 139]), Err(Error::Capacity { len: 139, capacity: 138 }));
    assert_eq!(encode(5, 0, &[b'A'; 78]), Err(Error::Capacity { len: 78, capacity: 77 }));
    assert_eq!(encode(4, 1_000_000, b"A"), Err(Error::InvalidEci(1_000_000)));

    let mut data = us_message();
    data.pop();
    assert_eq!(encode(2, 0, &data), Err(Error::Header(HeaderError::MissingEot)));
    assert_eq!(encode(3, 0, b"not a carrier message"), Err(Error::Header(HeaderError::MissingHeader)));
}
