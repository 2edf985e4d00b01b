//! Encrypts a message with each cipher family and opens it again.

use classic_ciphers::{CipherKind, Envelope, Keys};

fn main() {
    let keys = Keys::new("playfair example", "privacy");
    let message = "Hide the gold in the tree stump at 10";

    for kind in CipherKind::ALL {
        let envelope = Envelope::seal(kind, message, &keys).expect("seal");
        let opened = envelope.open(&keys).expect("open");
        println!("{:>8}: {}", kind.name(), envelope.ciphertext.to_uppercase());
        println!("{:>8}  {}", "", opened);
    }
}
