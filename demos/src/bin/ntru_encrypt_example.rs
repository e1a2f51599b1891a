use ntru_encrypt::params::{APR2011_439_FAST, APR2011_743};
use ntru_encrypt::{decrypt, encrypt, generate_key_pair};
use rand::rngs::OsRng;

fn main() {
    println!("NTRUEncrypt Example");
    println!("===================");

    // Choose a parameter set
    let params = APR2011_439_FAST;
    println!("Parameter set: {} (N={}, q={})", params.name, params.n, params.q);

    // Generate a keypair
    let kp = generate_key_pair(&params, &mut OsRng).expect("key generation failed");
    let pub_bytes = kp.public.to_bytes(&params);
    println!(
        "Generated keypair, public key starts with {}",
        hex::encode(&pub_bytes[0..8])
    );

    // Encrypt a message
    let message = b"hello world";
    println!("Message: {}", String::from_utf8_lossy(message));
    let ciphertext =
        encrypt(message, &kp.public, &params, &mut OsRng).expect("encryption failed");
    println!(
        "Ciphertext ({} bytes) starts with {}",
        ciphertext.len(),
        hex::encode(&ciphertext[0..8])
    );

    // Decrypt it again
    let decrypted = decrypt(&ciphertext, &kp, &params).expect("decryption failed");
    println!("Decrypted: {}", String::from_utf8_lossy(&decrypted));

    if decrypted == message {
        println!("Round trip successful!");
    } else {
        println!("Round trip FAILED");
    }

    // A second parameter set with longer messages
    println!();
    let params = APR2011_743;
    println!(
        "Parameter set: {} (up to {} byte messages)",
        params.name,
        params.max_msg_len_bytes()
    );
    let kp = generate_key_pair(&params, &mut OsRng).expect("key generation failed");
    let ciphertext = encrypt(b"", &kp.public, &params, &mut OsRng).expect("encryption failed");
    let decrypted = decrypt(&ciphertext, &kp, &params).expect("decryption failed");
    println!(
        "Empty message round trip: {}",
        if decrypted.is_empty() { "ok" } else { "FAILED" }
    );
}
