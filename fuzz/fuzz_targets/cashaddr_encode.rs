use honggfuzz::fuzz;

use cashaddr::AddressType;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if data.len() < 21 {
                return;
            }
            let (hash, prefix) = data.split_at(20);
            let hash: [u8; 20] = hash.try_into().unwrap();
            let version = prefix[0] & 0x07;
            let addr_type = if prefix[0] & 0x08 == 0 {
                AddressType::P2pkh
            } else {
                AddressType::P2sh
            };
            let prefix: String = prefix[1..]
                .iter()
                .map(|b| char::from(b'a' + b % 26))
                .collect();
            let encoded = cashaddr::encode(&prefix, version, addr_type, &hash).unwrap();
            let decoded = cashaddr::decode(&encoded).unwrap();
            assert_eq!(decoded.prefix, prefix);
            assert_eq!(decoded.version, version);
            assert_eq!(decoded.address_type, addr_type);
            assert_eq!(decoded.hash, hash);
        });
    }
}
