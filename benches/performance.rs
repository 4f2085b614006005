//! Performance benchmarks for command building and output parsing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use remote_ping::{parse_background_pid, parse_ping_output, PingCommand};

/// Create a ping capture with `replies` echo lines before the summary
fn create_capture(replies: usize) -> String {
    let mut raw = String::from("PING 10.0.0.1 (10.0.0.1) 56(84) bytes of data.\n");
    for seq in 1..=replies {
        raw.push_str(&format!(
            "64 bytes from 10.0.0.1: icmp_seq={} ttl=64 time=0.{:03} ms\n",
            seq,
            seq % 1000
        ));
    }
    raw.push_str("\n--- 10.0.0.1 ping statistics ---\n");
    raw.push_str(&format!(
        "{} packets transmitted, {} received, 0% packet loss, time {}ms\n",
        replies,
        replies,
        replies * 1000
    ));
    raw.push_str("rtt min/avg/max/mdev = 0.061/0.064/0.069/0.009 ms\n");
    raw
}

fn bench_parse_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_ping_output");
    for replies in [10usize, 100, 1000] {
        let capture = create_capture(replies);
        group.bench_with_input(BenchmarkId::from_parameter(replies), &capture, |b, raw| {
            b.iter(|| parse_ping_output(black_box(raw)))
        });
    }
    group.finish();
}

fn bench_parse_pid(c: &mut Criterion) {
    c.bench_function("parse_background_pid", |b| {
        b.iter(|| parse_background_pid(black_box("[1] 12345")))
    });
}

fn bench_build_command(c: &mut Criterion) {
    c.bench_function("build_ipv6_background", |b| {
        b.iter(|| {
            PingCommand::build(black_box(5), black_box("fd00::1"), Some(0.5))
                .and_then(|cmd| cmd.background("/dev/null"))
        })
    });
}

criterion_group!(benches, bench_parse_output, bench_parse_pid, bench_build_command);
criterion_main!(benches);
