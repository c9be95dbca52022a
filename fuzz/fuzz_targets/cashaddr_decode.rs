use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &str| {
            if let Ok(decoded) = cashaddr::decode(data) {
                assert_eq!(decoded.diagnostics.polymod, 0);
                if let Ok(encoded) = decoded.encode() {
                    assert_eq!(cashaddr::decode(&encoded).unwrap().hash, decoded.hash);
                }
            }
        });
    }
}
