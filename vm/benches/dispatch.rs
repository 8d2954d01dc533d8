//! Dispatch loop throughput.
//!
//!   cargo bench -p vm --bench dispatch

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io;
use vm::VM;

const COUNT_LOOP: &str = "\
set i 0
label loop
exec c lt i 100000
branchif c body
jump done
label body
exec i add i 1
jump loop
label done
";

const FLOAT_LOOP: &str = "\
set i 0
set acc 0.0
label loop
exec c lt i 100000
branchif c body
jump done
label body
exec h hypot acc 1.5
exec acc mul h 0.5
exec i add i 1
jump loop
label done
display acc
";

fn bench_loop(c: &mut Criterion, name: &str, source: &str) {
    let program = compiler::compile(source).expect("benchmark source compiles");
    c.bench_function(name, |b| {
        b.iter(|| {
            let mut vm = VM::new(program.clone());
            vm.interpret(&mut io::sink()).expect("benchmark runs");
            black_box(vm.pc())
        })
    });
}

fn dispatch(c: &mut Criterion) {
    bench_loop(c, "int_count_loop", COUNT_LOOP);
    bench_loop(c, "float_hypot_loop", FLOAT_LOOP);
}

criterion_group!(benches, dispatch);
criterion_main!(benches);
