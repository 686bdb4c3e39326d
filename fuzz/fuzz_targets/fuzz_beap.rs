#![no_main]

use arbitrary::Arbitrary;
use beap::VerifiedBeap;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Insert(i32),
    RemoveLast,
    Remove(i32),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut beap = VerifiedBeap::new();
    for op in ops {
        match op {
            Op::Insert(v) => beap.insert(v),
            Op::RemoveLast => {
                if !beap.is_empty() {
                    beap.delete_at(beap.len() - 1);
                }
            }
            Op::Remove(v) => {
                beap.remove(&v);
            }
        }
        beap.check_invariants();
    }
});
