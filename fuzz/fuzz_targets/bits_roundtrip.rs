use honggfuzz::fuzz;

use cashaddr::bits::{pack5, unpack5};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let symbols = pack5(data);
            assert!(symbols.iter().all(|&s| s < 32));
            assert_eq!(unpack5(&symbols), data);
        });
    }
}
