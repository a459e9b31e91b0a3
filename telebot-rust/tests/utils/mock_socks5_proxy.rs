use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const SOCKS_VERSION: u8 = 0x05;
const AUTH_VERSION: u8 = 0x01;
const METHOD_NO_AUTH: u8 = 0x00;
const METHOD_PASSWORD: u8 = 0x02;
const METHOD_NONE_ACCEPTABLE: u8 = 0xff;
const CMD_CONNECT: u8 = 0x01;

const REPLY_SUCCEEDED: [u8; 10] = [SOCKS_VERSION, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0];
const REPLY_HOST_UNREACHABLE: [u8; 10] = [SOCKS_VERSION, 0x04, 0x00, 0x01, 0, 0, 0, 0, 0, 0];

#[derive(Default)]
struct ProxyState {
    required_credentials: Option<(String, String)>,
    seen_credentials: Mutex<Vec<(String, String)>>,
    connect_targets: Mutex<Vec<String>>,
}

/// In-process SOCKS5 server (RFC 1928 CONNECT, RFC 1929 username/password)
/// that tunnels to whatever target the client asks for.
pub struct MockSocks5Proxy {
    addr: String,
    state: Arc<ProxyState>,
}

impl MockSocks5Proxy {
    pub async fn start(required_credentials: Option<(&str, &str)>) -> MockSocks5Proxy {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let state = Arc::new(ProxyState {
            required_credentials: required_credentials
                .map(|(user, pass)| (user.to_string(), pass.to_string())),
            ..ProxyState::default()
        });

        let accept_state = state.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let state = accept_state.clone();
                tokio::spawn(async move {
                    let _ = handle_client(stream, state).await;
                });
            }
        });

        MockSocks5Proxy { addr, state }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub fn seen_credentials(&self) -> Vec<(String, String)> {
        self.state.seen_credentials.lock().clone()
    }

    pub fn connect_targets(&self) -> Vec<String> {
        self.state.connect_targets.lock().clone()
    }
}

async fn handle_client(mut client: TcpStream, state: Arc<ProxyState>) -> std::io::Result<()> {
    let mut greeting = [0u8; 2];
    client.read_exact(&mut greeting).await?;
    let mut methods = vec![0u8; greeting[1] as usize];
    client.read_exact(&mut methods).await?;

    match &state.required_credentials {
        Some(required) => {
            if !methods.contains(&METHOD_PASSWORD) {
                client
                    .write_all(&[SOCKS_VERSION, METHOD_NONE_ACCEPTABLE])
                    .await?;
                return Ok(());
            }
            client.write_all(&[SOCKS_VERSION, METHOD_PASSWORD]).await?;

            let credentials = read_credentials(&mut client).await?;
            state.seen_credentials.lock().push(credentials.clone());

            if &credentials != required {
                client.write_all(&[AUTH_VERSION, 0x01]).await?;
                return Ok(());
            }
            client.write_all(&[AUTH_VERSION, 0x00]).await?;
        }
        None => {
            if !methods.contains(&METHOD_NO_AUTH) {
                client
                    .write_all(&[SOCKS_VERSION, METHOD_NONE_ACCEPTABLE])
                    .await?;
                return Ok(());
            }
            client.write_all(&[SOCKS_VERSION, METHOD_NO_AUTH]).await?;
        }
    }

    let mut request = [0u8; 4];
    client.read_exact(&mut request).await?;
    if request[1] != CMD_CONNECT {
        return Ok(());
    }

    let host = match request[3] {
        0x01 => {
            let mut ip = [0u8; 4];
            client.read_exact(&mut ip).await?;
            Ipv4Addr::from(ip).to_string()
        }
        0x03 => {
            let mut len = [0u8; 1];
            client.read_exact(&mut len).await?;
            let mut domain = vec![0u8; len[0] as usize];
            client.read_exact(&mut domain).await?;
            String::from_utf8_lossy(&domain).into_owned()
        }
        0x04 => {
            let mut ip = [0u8; 16];
            client.read_exact(&mut ip).await?;
            format!("[{}]", Ipv6Addr::from(ip))
        }
        _ => return Ok(()),
    };

    let mut port = [0u8; 2];
    client.read_exact(&mut port).await?;
    let target = format!("{host}:{}", u16::from_be_bytes(port));
    state.connect_targets.lock().push(target.clone());

    let mut upstream = match TcpStream::connect(&target).await {
        Ok(upstream) => upstream,
        Err(_) => {
            client.write_all(&REPLY_HOST_UNREACHABLE).await?;
            return Ok(());
        }
    };
    client.write_all(&REPLY_SUCCEEDED).await?;

    tokio::io::copy_bidirectional(&mut client, &mut upstream).await?;
    Ok(())
}

async fn read_credentials(client: &mut TcpStream) -> std::io::Result<(String, String)> {
    let mut header = [0u8; 2];
    client.read_exact(&mut header).await?;
    let mut username = vec![0u8; header[1] as usize];
    client.read_exact(&mut username).await?;

    let mut password_len = [0u8; 1];
    client.read_exact(&mut password_len).await?;
    let mut password = vec![0u8; password_len[0] as usize];
    client.read_exact(&mut password).await?;

    Ok((
        String::from_utf8_lossy(&username).into_owned(),
        String::from_utf8_lossy(&password).into_owned(),
    ))
}
