// AppWindow implementation for Slint
// Rust code-behind for the key generation / encrypt / decrypt window

use std::rc::Rc;

use crate::service::RsaService;

slint::slint! {
    import { Button, LineEdit, TextEdit, VerticalBox, HorizontalBox, GroupBox } from "std-widgets.slint";

    export component AppWindow inherits Window {
        title: "Toy RSA";
        preferred-width: 640px;
        preferred-height: 560px;

        in-out property <string> prime-p;
        in-out property <string> prime-q;
        in-out property <string> phi;
        in-out property <string> public-e;
        in-out property <string> public-n;
        in-out property <string> private-d;
        in-out property <string> input-text;
        in-out property <string> cipher-text;
        in-out property <string> output-text;
        in-out property <string> status-message: "Ready";

        callback generate-keys();
        callback clear-keys();
        callback encrypt-text();
        callback decrypt-text();

        VerticalBox {
            GroupBox {
                title: "Keys";
                VerticalBox {
                    HorizontalBox {
                        LineEdit { placeholder-text: "p (random if empty)"; text <=> root.prime-p; }
                        LineEdit { placeholder-text: "q (random if empty)"; text <=> root.prime-q; }
                        Button { text: "Generate"; clicked => { root.generate-keys(); } }
                        Button { text: "Clear"; clicked => { root.clear-keys(); } }
                    }
                    HorizontalBox {
                        LineEdit { placeholder-text: "e"; text <=> root.public-e; }
                        LineEdit { placeholder-text: "d"; text <=> root.private-d; }
                        LineEdit { placeholder-text: "n"; text <=> root.public-n; }
                    }
                    Text { text: "phi = " + root.phi; }
                }
            }

            GroupBox {
                title: "Message";
                VerticalBox {
                    LineEdit { placeholder-text: "Plain text"; text <=> root.input-text; }
                    HorizontalBox {
                        Button { text: "Encrypt"; clicked => { root.encrypt-text(); } }
                        Button { text: "Decrypt"; clicked => { root.decrypt-text(); } }
                    }
                    TextEdit { text <=> root.cipher-text; }
                    Text { text: "Decrypted: " + root.output-text; }
                }
            }

            Text { text: root.status-message; }
        }
    }
}

pub fn create_app(service: RsaService) -> Result<(), slint::PlatformError> {
    let app = AppWindow::new()?;
    let service = Rc::new(service);

    // Set up callbacks
    let weak_app = app.as_weak();

    // Generate keys callback
    {
        let weak_app = weak_app.clone();
        let service = Rc::clone(&service);

        app.on_generate_keys(move || {
            if let Some(app) = weak_app.upgrade() {
                let p: String = app.get_prime_p().into();
                let q: String = app.get_prime_q().into();

                match service.generate_keys(Some(p.as_str()), Some(q.as_str())) {
                    Ok(report) => {
                        app.set_prime_p(report.details.p.into());
                        app.set_prime_q(report.details.q.into());
                        app.set_phi(report.details.phi.into());
                        app.set_public_e(report.public_key.0.into());
                        app.set_public_n(report.public_key.1.into());
                        app.set_private_d(report.private_key.0.into());
                        app.set_status_message("Key pair generated".into());
                    }
                    Err(e) => {
                        app.set_status_message(format!("Error: {}", e).into());
                    }
                }
            }
        });
    }

    // Clear keys callback
    {
        let weak_app = weak_app.clone();

        app.on_clear_keys(move || {
            if let Some(app) = weak_app.upgrade() {
                app.set_prime_p("".into());
                app.set_prime_q("".into());
                app.set_phi("".into());
                app.set_public_e("".into());
                app.set_public_n("".into());
                app.set_private_d("".into());
                app.set_status_message("Keys cleared".into());
            }
        });
    }

    // Encrypt text callback
    {
        let weak_app = weak_app.clone();
        let service = Rc::clone(&service);

        app.on_encrypt_text(move || {
            if let Some(app) = weak_app.upgrade() {
                let message: String = app.get_input_text().into();
                let e: String = app.get_public_e().into();
                let n: String = app.get_public_n().into();

                match service.encrypt(&message, &e, &n) {
                    Ok(tokens) => {
                        app.set_cipher_text(tokens.join(" ").into());
                        app.set_status_message("Text encrypted".into());
                    }
                    Err(err) => {
                        app.set_status_message(format!("Encryption error: {}", err).into());
                    }
                }
            }
        });
    }

    // Decrypt text callback
    {
        let weak_app = weak_app.clone();
        let service = Rc::clone(&service);

        app.on_decrypt_text(move || {
            if let Some(app) = weak_app.upgrade() {
                let cipher_text: String = app.get_cipher_text().into();
                let d: String = app.get_private_d().into();
                let n: String = app.get_public_n().into();
                let tokens = split_tokens(&cipher_text);

                match service.decrypt(&tokens, &d, &n) {
                    Ok(plaintext) => {
                        app.set_output_text(plaintext.into());
                        app.set_status_message("Text decrypted".into());
                    }
                    Err(e) => {
                        app.set_status_message(format!("Decryption error: {}", e).into());
                    }
                }
            }
        });
    }

    app.set_status_message(format!("Ready - prime pool: {:?}", service.config().prime_pool).into());

    app.run()
}

/// Tokens are shown space separated; commas are accepted too
fn split_tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect()
}
