//! File output integration tests.
//!
//! Files written by the encoder are read back with `hound` to check that a
//! general-purpose reader agrees with the header and payload.

use std::fs;

use pcmwave::{QuantizeMode, WaveEncoder, WaveError};
use pretty_assertions::assert_eq;

#[test]
fn test_save_16bit_mono_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mono16.wav");

    let mut encoder = WaveEncoder::new(1, 44100, 16).unwrap();
    encoder.set_samples(vec![0.0, 1.0, -1.0, 0.5, -0.5]);
    let written = encoder.save(&path).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples, vec![0, 32767, -32767, 16383, -16383]);
    assert_eq!(written.as_i16(), Some(&samples[..]));
}

#[test]
fn test_save_8bit_mono_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mono8.wav");

    let mut encoder = WaveEncoder::new(1, 8000, 8).unwrap();
    encoder.set_samples(vec![0.0, 1.0, -1.0]);
    encoder.save(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 47);
    assert_eq!(&bytes[44..], &[127, 254, 0]);

    // hound maps unsigned 8-bit to signed by subtracting 128
    let mut reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.spec().bits_per_sample, 8);
    let samples: Vec<i8> = reader.samples::<i8>().map(|s| s.unwrap()).collect();
    assert_eq!(samples, vec![-1, 126, -128]);
}

#[test]
fn test_save_stereo_frame_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stereo.wav");

    let mut encoder = WaveEncoder::new(2, 22050, 16).unwrap();
    encoder.set_samples(vec![0.25; 100]);
    encoder.save(&path).unwrap();

    let reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.spec().channels, 2);
    assert_eq!(reader.duration(), 100);
    assert_eq!(reader.len(), 200);
}

#[test]
fn test_save_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.wav");

    let encoder = WaveEncoder::new(2, 44100, 16).unwrap();
    let written = encoder.save(&path).unwrap();

    assert!(written.is_empty());
    assert_eq!(fs::metadata(&path).unwrap().len(), 44);
    let reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.len(), 0);
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    fs::write(&path, vec![0xAB; 4096]).unwrap();

    let mut encoder = WaveEncoder::new(1, 8000, 8).unwrap();
    encoder.set_samples(vec![0.0; 4]);
    encoder.save(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 48);
    assert_eq!(&bytes[0..4], b"RIFF");
}

#[test]
fn test_save_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.wav");
    let second = dir.path().join("b.wav");

    let mut encoder = WaveEncoder::new(1, 44100, 16).unwrap();
    encoder.set_samples((0..1000).map(|i| (i as f64 * 0.01).sin()).collect::<Vec<_>>());
    let q1 = encoder.save(&first).unwrap();
    let q2 = encoder.save(&second).unwrap();

    assert_eq!(q1, q2);
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_save_encoded_matches_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("encoded.wav");
    let plain = dir.path().join("plain.wav");

    let mut encoder = WaveEncoder::new(2, 8000, 8).unwrap();
    encoder.set_samples(vec![0.0, 1.0, -1.0]);
    let encoded = encoder.save_encoded(&path).unwrap();
    let quantized = encoder.save(&plain).unwrap();

    assert_eq!(fs::read(&path).unwrap(), encoded.bytes);
    assert_eq!(encoded.bytes.len(), 44 + 6);
    assert_eq!(encoded.num_frames(), 3);
    assert_eq!(encoded.pcm_hash.len(), 64);
    assert_eq!(encoded.quantized, quantized);
    assert_eq!(fs::read(&plain).unwrap(), encoded.bytes);
}

#[test]
fn test_save_into_missing_directory_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.wav");

    let mut encoder = WaveEncoder::new(1, 8000, 8).unwrap();
    encoder.set_samples(vec![0.0; 8]);
    let err = encoder.save(&path).unwrap_err();

    assert!(matches!(err, WaveError::Io(_)));
    assert!(!path.exists());
}

#[test]
fn test_failed_encode_leaves_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keep.wav");
    fs::write(&path, b"previous").unwrap();

    let mut encoder = WaveEncoder::new(1, 8000, 16).unwrap();
    encoder.set_samples(vec![0.0, f64::INFINITY]);
    assert!(encoder.save(&path).is_err());

    assert_eq!(fs::read(&path).unwrap(), b"previous");
    // No stray temp files next to the destination
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_clamp_mode_file_reads_back_in_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clamped.wav");

    let mut encoder = WaveEncoder::new(1, 44100, 16)
        .unwrap()
        .with_quantize_mode(QuantizeMode::Clamp);
    encoder.set_samples(vec![3.0, -3.0]);
    encoder.save(&path).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples, vec![32767, -32767]);
}
