use super::*;

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

/// Offset of the first ROM section (after the total-length field and config section).
const ROM_START: usize = 4 + 178;

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_concrete_package() {
    let bytes = encode(b"game.pce", &[0x01, 0x02, 0x03, 0x04]).unwrap();

    // config 178 + 2 × rom section 17 = 212
    assert_eq!(bytes.len(), 216);
    assert_eq!(read_u32(&bytes, 0), 212);

    let mut expected = Vec::new();
    expected.extend_from_slice(&212u32.to_le_bytes());
    expected.extend_from_slice(&160u32.to_le_bytes());
    expected.extend_from_slice(b"pceconfig.bin\0");
    expected.extend_from_slice(&[0; 32]);
    for _ in 0..2 {
        expected.extend_from_slice(b"game.pce");
        expected.extend_from_slice(&[0; 56]);
    }
    for _ in 0..2 {
        expected.extend_from_slice(&[4, 0, 0, 0]);
        expected.extend_from_slice(b"game.pce\0");
        expected.extend_from_slice(&[1, 2, 3, 4]);
    }
    assert_eq!(bytes, expected);
}

#[test]
fn test_fixed_offsets() {
    let bytes = encode(b"Bonk.pce", &[0xAA; 32]).unwrap();

    assert_eq!(read_u32(&bytes, 4), 160);
    assert_eq!(&bytes[8..22], b"pceconfig.bin\0");
    assert!(bytes[22..54].iter().all(|&b| b == 0));
    assert_eq!(&bytes[54..62], b"Bonk.pce");
    assert_eq!(&bytes[118..126], b"Bonk.pce");
    assert_eq!(read_u32(&bytes, 182), 32);
    assert_eq!(&bytes[186..195], b"Bonk.pce\0");
}

#[test]
fn test_length_formula() {
    for name_len in [0, 1, 8, 63, 64] {
        for rom_len in [0, 1, 255, 4096] {
            let name = vec![b'n'; name_len];
            let rom = vec![0x5A; rom_len];
            let bytes = encode(&name, &rom).unwrap();

            assert_eq!(
                bytes.len(),
                4 + 4 + 160 + 2 * (4 + name_len + 1 + rom_len) + 14,
                "name {name_len}, rom {rom_len}"
            );
            assert_eq!(read_u32(&bytes, 0) as usize, bytes.len() - 4);
            assert_eq!(read_u32(&bytes, 4), 160);
        }
    }
}

#[test]
fn test_rom_sections_identical() {
    let rom: Vec<u8> = (0..=255).cycle().take(3000).collect();
    let bytes = encode(b"sections.pce", &rom).unwrap();

    let section = &bytes[ROM_START..];
    let (first, second) = section.split_at(section.len() / 2);
    assert_eq!(first, second);
    assert_eq!(first.len(), 4 + 13 + 3000);
}

#[test]
fn test_name_too_long() {
    assert_eq!(
        encode(&[b'x'; 65], &[1, 2, 3]),
        Err(EncodeError::NameTooLong { len: 65 })
    );
}

#[test]
fn test_name_exactly_64() {
    let name = [b'z'; 64];
    let bytes = encode(&name, &[9]).unwrap();

    // Both slots are filled completely, no zero fill between them
    assert_eq!(&bytes[54..118], &name);
    assert_eq!(&bytes[118..182], &name);
    assert_eq!(read_u32(&bytes, 182), 1);
}

#[test]
fn test_empty_rom() {
    let bytes = encode(b"empty.pce", &[]).unwrap();

    let section_len = 4 + 10;
    assert_eq!(bytes.len(), ROM_START + 2 * section_len);
    for copy in 0..2 {
        let start = ROM_START + copy * section_len;
        assert_eq!(read_u32(&bytes, start), 0);
        assert_eq!(&bytes[start + 4..start + section_len], b"empty.pce\0");
    }
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_total_length_overflow_boundary() {
    // Zeroed allocations are lazy, so these buffers are never touched
    let name = RomName::new(b"").unwrap();
    let max = (u32::MAX as usize - 178) / 2 - 5;
    assert_eq!(max as u64, PCE_PKG_FORMAT.max_rom_size(0));

    let largest = vec![0u8; max];
    assert_eq!(
        PcePackage::new(&name, &largest).body_len(),
        Ok(u32::MAX - 1)
    );
    drop(largest);

    let too_big = vec![0u8; max + 1];
    let overflow = EncodeError::LengthOverflow {
        value: u32::MAX as u64 + 1,
    };
    assert_eq!(
        PcePackage::new(&name, &too_big).body_len(),
        Err(overflow.clone())
    );
    assert_eq!(
        PcePackage::new(&name, &too_big).to_bytes().unwrap_err(),
        overflow
    );
    assert_eq!(encode(b"", &too_big).unwrap_err(), overflow);
}

#[test]
fn test_preallocated_exactly() {
    let name = RomName::new(b"alloc.pce").unwrap();
    let rom = [7u8; 100];
    let package = PcePackage::new(&name, &rom);

    let bytes = package.to_bytes().unwrap();
    assert_eq!(package.encoded_len().unwrap(), bytes.len());
    assert_eq!(package.body_len().unwrap() as usize, bytes.len() - 4);
}

#[test]
fn test_matches_format_constants() {
    let name = RomName::new(b"fmt.pce").unwrap();
    let rom = [0u8; 10];
    let bytes = PcePackage::new(&name, &rom).to_bytes().unwrap();
    assert_eq!(bytes.len(), PCE_PKG_FORMAT.package_size(7, 10));
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn test_decode_recovers_inputs() {
    for (name, rom) in [
        (&b"game.pce"[..], vec![1u8, 2, 3, 4]),
        (&b""[..], vec![]),
        (&[b'q'; 64][..], vec![0; 1024]),
        (&b"R-Type (J).pce"[..], (0..=255).collect()),
    ] {
        let bytes = encode(name, &rom).unwrap();
        let decoded = PcePackage::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.name.as_bytes(), name);
        assert_eq!(decoded.rom, rom);
    }
}

#[test]
fn test_decode_truncated() {
    let bytes = encode(b"game.pce", &[1, 2, 3, 4]).unwrap();
    assert!(matches!(
        PcePackage::from_bytes(&bytes[..2]),
        Err(DecodeError::Truncated { .. })
    ));
}

#[test]
fn test_decode_total_length_mismatch() {
    let mut bytes = encode(b"game.pce", &[1, 2, 3, 4]).unwrap();
    bytes.push(0);
    assert_eq!(
        PcePackage::from_bytes(&bytes),
        Err(DecodeError::TotalLengthMismatch {
            declared: 212,
            actual: 213
        })
    );
}

#[test]
fn test_decode_bad_config_size() {
    let mut bytes = encode(b"game.pce", &[1, 2, 3, 4]).unwrap();
    bytes[4] = 161;
    assert_eq!(
        PcePackage::from_bytes(&bytes),
        Err(DecodeError::BadConfigSize(161))
    );
}

#[test]
fn test_decode_bad_config_filename() {
    let mut bytes = encode(b"game.pce", &[1, 2, 3, 4]).unwrap();
    bytes[8] = b'x';
    assert_eq!(
        PcePackage::from_bytes(&bytes),
        Err(DecodeError::BadConfigFilename)
    );
}

#[test]
fn test_decode_non_zero_padding() {
    let mut bytes = encode(b"game.pce", &[1, 2, 3, 4]).unwrap();
    bytes[30] = 1;
    assert_eq!(
        PcePackage::from_bytes(&bytes),
        Err(DecodeError::NonZeroPadding)
    );
}

#[test]
fn test_decode_name_slot_mismatch() {
    let mut bytes = encode(b"game.pce", &[1, 2, 3, 4]).unwrap();
    bytes[118] = b'G';
    assert_eq!(
        PcePackage::from_bytes(&bytes),
        Err(DecodeError::NameSlotMismatch)
    );
}

#[test]
fn test_decode_section_name_mismatch() {
    let mut bytes = encode(b"game.pce", &[1, 2, 3, 4]).unwrap();
    bytes[186] = b'G';
    assert_eq!(
        PcePackage::from_bytes(&bytes),
        Err(DecodeError::SectionNameMismatch { index: 0 })
    );
}

#[test]
fn test_decode_rom_copies_differ() {
    let mut bytes = encode(b"game.pce", &[1, 2, 3, 4]).unwrap();
    let last = bytes.len() - 1;
    bytes[last] = 0xFF;
    assert_eq!(
        PcePackage::from_bytes(&bytes),
        Err(DecodeError::RomCopiesDiffer { index: 1 })
    );
}

#[test]
fn test_decode_missing_terminator() {
    // Hand-built package whose first ROM section name runs to the end of the buffer
    let mut body = Vec::new();
    ConfigSection::new(&RomName::new(b"game.pce").unwrap())
        .write_to(&mut body)
        .unwrap();
    body.extend_from_slice(&[0, 0, 0, 0]);
    body.extend_from_slice(b"game.pce");

    let mut bytes = Vec::new();
    write_length(&mut bytes, body.len()).unwrap();
    bytes.extend_from_slice(&body);

    assert_eq!(
        PcePackage::from_bytes(&bytes),
        Err(DecodeError::MissingTerminator(186))
    );
}

#[test]
fn test_decode_trailing_bytes() {
    let mut bytes = encode(b"game.pce", &[1, 2, 3, 4]).unwrap();
    bytes.extend_from_slice(&[0, 0]);
    let total = (bytes.len() - 4) as u32;
    bytes[0..4].copy_from_slice(&total.to_le_bytes());
    assert_eq!(
        PcePackage::from_bytes(&bytes),
        Err(DecodeError::TrailingBytes(2))
    );
}
