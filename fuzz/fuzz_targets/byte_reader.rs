#![no_main]

use bytestream::ByteReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 8;
        idx += 1;

        // Varint reads may consume groups before failing.
        if op == 5 {
            let _ = reader.read_var_u32();
            continue;
        }

        let before = reader.position();
        let ok = match op {
            0 => reader.read_u8().is_ok(),
            1 => reader.read_u32().is_ok(),
            2 => reader.read_i32().is_ok(),
            3 => reader.read_i64().is_ok(),
            4 => reader.read_f32().is_ok(),
            6 => {
                let len = usize::from(data[idx.saturating_sub(1)] % 32);
                reader.read_bytes(len).is_ok()
            }
            _ => reader
                .skip(usize::from(data[idx.saturating_sub(1)] % 16))
                .is_ok(),
        };
        if !ok {
            assert_eq!(reader.position(), before);
        }
    }
});
