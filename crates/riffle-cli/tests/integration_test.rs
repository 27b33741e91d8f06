//! Integration tests for the `riffle` binary.
//!
//! Each test writes a WAV fixture to a temp directory, runs the binary on
//! it, and checks stdout, stderr, and the exit code. One fixture comes from
//! `hound` to confirm the tool accepts files produced by an independent
//! writer.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ──────────────────────── helpers ────────────────────────

/// The canonical minimal WAV: preamble + `fmt ` chunk and nothing else,
/// with the ChunkSize field covering the whole 36-byte file.
fn minimal_wav() -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&36u32.to_le_bytes());
    buf.extend_from_slice(b"WAVE");
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM
    buf.extend_from_slice(&1u16.to_le_bytes()); // mono
    buf.extend_from_slice(&8000u32.to_le_bytes());
    buf.extend_from_slice(&16000u32.to_le_bytes());
    buf.extend_from_slice(&2u16.to_le_bytes());
    buf.extend_from_slice(&16u16.to_le_bytes());
    buf
}

/// Append a subchunk and fix up the RIFF ChunkSize to length minus 8.
fn append_chunk(buf: &mut Vec<u8>, id: &[u8; 4], payload: &[u8]) {
    buf.extend_from_slice(id);
    buf.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    buf.extend_from_slice(payload);
    let chunk_size = (buf.len() - 8) as u32;
    buf[4..8].copy_from_slice(&chunk_size.to_le_bytes());
}

/// Write raw bytes to a fixture file inside the temp dir.
fn write_fixture(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("Failed to write fixture");
    path
}

/// Write a small 16-bit integer PCM WAV using `hound`.
fn write_hound_wav(path: &Path) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create WAV writer");
    for s in [0i16, 1000, -1000, 0] {
        writer.write_sample(s).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize WAV");
}

/// Get a `Command` for the `riffle` binary.
#[allow(deprecated)]
fn riffle_cmd() -> Command {
    Command::cargo_bin("riffle").expect("Failed to find `riffle` binary")
}

// ──────────────────────── tests ─────────────────────────

#[test]
fn test_minimal_wav_dumps_exact_structure() {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = write_fixture(&tmp, "minimal.wav", &minimal_wav());

    riffle_cmd()
        .arg(path.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "RIFF[ChunkSize: 36, Format: 'WAVE']\n\
             [SubChunk1Id: 'fmt ', size: 16, AudioFormat: 'PCM', \
             NumChannels: 1, SampleRate: 8000, ByteRate: 16000, \
             BlockAlign: 2, BitsPerSample: 16]\n",
        ));
}

#[test]
fn test_oversized_chunk_size_exits_one() {
    let mut wav = minimal_wav();
    wav[4..8].copy_from_slice(&1_000_000u32.to_le_bytes());
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = write_fixture(&tmp, "oversized.wav", &wav);

    riffle_cmd()
        .arg(path.to_str().unwrap())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("1000000"));
}

#[test]
fn test_info_list_fields_are_rendered() {
    let mut wav = minimal_wav();
    let mut list = b"INFO".to_vec();
    list.extend_from_slice(b"IART");
    list.extend_from_slice(&5u32.to_le_bytes());
    list.extend_from_slice(b"Alice");
    list.push(0x00);
    append_chunk(&mut wav, b"LIST", &list);
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = write_fixture(&tmp, "tagged.wav", &wav);

    riffle_cmd()
        .arg(path.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[SubChunk2Id: 'LIST', size: 18, INFO[",
        ))
        .stdout(predicate::str::contains("\tIART[size: 5, 'Alice']Extra[\\0]\n"))
        .stdout(predicate::str::contains("]]\n"));
}

#[test]
fn test_unknown_codec_renders_decimal() {
    let mut wav = minimal_wav();
    wav[20..22].copy_from_slice(&0x1234u16.to_le_bytes());
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = write_fixture(&tmp, "exotic.wav", &wav);

    riffle_cmd()
        .arg(path.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("AudioFormat: '4660'"));
}

#[test]
fn test_non_printable_chunk_id_exits_one() {
    let mut wav = minimal_wav();
    append_chunk(&mut wav, &[0x01, 0x02, 0x03, 0x04], b"");
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = write_fixture(&tmp, "desync.wav", &wav);

    riffle_cmd()
        .arg(path.to_str().unwrap())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("non-printable"));
}

#[test]
fn test_truncated_file_exits_one() {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = write_fixture(&tmp, "stub.wav", b"RIFF");

    riffle_cmd()
        .arg(path.to_str().unwrap())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Truncated"));
}

#[test]
fn test_empty_file_exits_one() {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = write_fixture(&tmp, "empty.wav", b"");

    riffle_cmd()
        .arg(path.to_str().unwrap())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Truncated"));
}

#[test]
fn test_missing_file_exits_one() {
    riffle_cmd()
        .arg("/nonexistent/no-such-file.wav")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to open"));
}

#[test]
fn test_no_arguments_exits_one() {
    riffle_cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_excess_arguments_exit_one() {
    riffle_cmd()
        .args(["a.wav", "b.wav"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_help_exits_zero() {
    riffle_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chunk hierarchy"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_version_exits_zero() {
    riffle_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("riffle"));
}

#[test]
fn test_accepts_wav_from_independent_writer() {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = tmp.path().join("hound.wav");
    write_hound_wav(&path);

    riffle_cmd()
        .arg(path.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("AudioFormat: 'PCM'"))
        .stdout(predicate::str::contains("SampleRate: 44100"))
        .stdout(predicate::str::contains("[SubChunk2Id: 'data', size: 8, "));
}

#[test]
fn test_verbose_flag_enables_debug_log() {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = write_fixture(&tmp, "minimal.wav", &minimal_wav());

    riffle_cmd()
        .args(["-v", path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Mapping input file"));
}
