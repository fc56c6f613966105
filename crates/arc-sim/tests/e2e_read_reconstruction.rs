use arc_codec::{MAX_FRAME_LEN, POST, PRE};
use arc_gatt::table::NAME_RESULT;
use arc_sim::{handle_of, test_session, SimCentral};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn ascii_blob(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(0x20..0x7F)).collect()
}

#[test]
fn e2e_result_read_reconstructs_a_45_byte_value() {
    let mut session = test_session();
    let central = SimCentral::new("AA:BB:CC:DD:EE:FF");
    let result = handle_of(&session, NAME_RESULT);

    let value = "x".repeat(45);
    session.submit_result(&value).expect("submit");

    let read = central
        .read_value(&mut session, result)
        .expect("result read should succeed");
    assert_eq!(read, value.as_bytes());
}

#[test]
fn e2e_empty_result_reads_as_the_two_byte_frame() {
    let mut session = test_session();
    let result = handle_of(&session, NAME_RESULT);

    let frame = session
        .attribute_read(result)
        .expect("read should succeed");
    assert_eq!(frame, vec![PRE, POST]);

    // still idle: the next read yields the same frame
    let frame = session
        .attribute_read(result)
        .expect("read should succeed");
    assert_eq!(frame, vec![PRE, POST]);
}

#[test]
fn e2e_reconstruction_holds_across_chunk_boundaries() {
    let mut rng = StdRng::seed_from_u64(7);
    for len in [1, 18, 19, 20, 37, 38, 39, 45, 57, 95] {
        let mut session = test_session();
        let central = SimCentral::new("AA:BB:CC:DD:EE:FF");
        let result = handle_of(&session, NAME_RESULT);

        let value = ascii_blob(&mut rng, len);
        let text = std::str::from_utf8(&value).expect("blob is ascii");
        session.submit_result(text).expect("submit");

        let read = central
            .read_value(&mut session, result)
            .expect("result read should succeed");
        assert_eq!(read, value, "length {len}");
    }
}

#[test]
fn e2e_every_frame_stays_within_the_transaction_cap() {
    let mut session = test_session();
    let result = handle_of(&session, NAME_RESULT);
    session
        .submit_result(&"y".repeat(200))
        .expect("submit");

    let mut frames = 0;
    loop {
        let frame = session
            .attribute_read(result)
            .expect("read should succeed");
        assert!(frame.len() <= MAX_FRAME_LEN);
        frames += 1;
        assert!(frames < 64, "read did not terminate");
        if frame.last() == Some(&POST) {
            break;
        }
    }
    assert!(frames > 1);
}

#[test]
fn e2e_value_survives_repeated_reads() {
    let mut session = test_session();
    let central = SimCentral::new("AA:BB:CC:DD:EE:FF");
    let result = handle_of(&session, NAME_RESULT);
    session.submit_result("persistent").expect("submit");

    for _ in 0..3 {
        let read = central
            .read_value(&mut session, result)
            .expect("result read should succeed");
        assert_eq!(read, b"persistent");
    }
}
