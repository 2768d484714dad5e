use std::collections::HashMap;
use std::net::IpAddr;
use bip_bencode::{ben_bytes, ben_int, ben_map};
use byteorder::{BigEndian, ByteOrder};
use chrono::Utc;
use crate::codec::enums::compact_peer::CompactPeer;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::announce_response::AnnounceResponse;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::types::announce_headers::AnnounceHeaders;

/// Parameters every announce must carry, checked in this order.
pub const REQUIRED_FIELDS: [&str; 6] = ["info_hash", "peer_id", "port", "uploaded", "downloaded", "left"];

/// Well-known ports of other services, never accepted as a peer port.
pub const BLACKLISTED_PORTS: [u16; 16] = [
    22, 53, 80, 81, 411, 412, 413, 443, 1214, 3389, 4662, 6346, 6347, 6699, 8080, 8081
];

pub const DEFAULT_NUMWANT: u64 = 25;
pub const HASH_LENGTH: usize = 20;
pub const COMPACT_PEER_V4_LENGTH: usize = 6;
pub const COMPACT_PEER_V6_LENGTH: usize = 18;

/// Splits a raw query string into percent-decoded values.
///
/// Keys are lowercased; values stay raw bytes because `info_hash` and
/// `peer_id` are binary. Repeated keys keep every value in order, a key
/// without `=` is kept with no values.
pub fn parse_query(query: &str) -> HashMap<String, Vec<Vec<u8>>> {
    let mut queries: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    for query_item in query.split('&').filter(|item| !item.is_empty()) {
        let (key_name_raw, value_data_raw) = match query_item.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (query_item, None),
        };
        let key_name = percent_encoding::percent_decode_str(key_name_raw).decode_utf8_lossy().to_lowercase();
        if key_name.is_empty() {
            continue;
        }
        let values = queries.entry(key_name).or_default();
        if let Some(value_data_raw) = value_data_raw {
            values.push(percent_encoding::percent_decode_str(value_data_raw).collect::<Vec<u8>>());
        }
    }
    queries
}

fn first_value<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str) -> Option<&'a [u8]> {
    query.get(field).and_then(|values| values.first()).map(|value| value.as_slice())
}

fn parse_unsigned(value: &[u8], attribute: &'static str) -> Result<u64, TrackerError> {
    if value.is_empty() || !value.iter().all(u8::is_ascii_digit) {
        return Err(TrackerError::FieldNumericInvalid { attribute });
    }
    std::str::from_utf8(value).ok()
        .and_then(|number| number.parse::<u64>().ok())
        .ok_or(TrackerError::FieldNumericInvalid { attribute })
}

fn optional_unsigned(query: &HashMap<String, Vec<Vec<u8>>>, attribute: &'static str, default: u64) -> Result<u64, TrackerError> {
    match first_value(query, attribute) {
        None => Ok(default),
        Some(value) => parse_unsigned(value, attribute),
    }
}

fn parse_port(value: &[u8], event: AnnounceEvent) -> Result<u16, TrackerError> {
    let invalid = || TrackerError::PortInvalid { port: String::from_utf8_lossy(value).into_owned() };
    if value.is_empty() || !value.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    let port = std::str::from_utf8(value).ok()
        .and_then(|number| number.parse::<u16>().ok())
        .ok_or_else(invalid)?;
    if is_blacklisted_port(port) {
        return Err(invalid());
    }
    if port == 0 && event != AnnounceEvent::Stopped {
        return Err(invalid());
    }
    Ok(port)
}

pub fn is_blacklisted_port(port: u16) -> bool {
    BLACKLISTED_PORTS.contains(&port)
}

/// Decodes and field-validates an announce query.
///
/// Checks run in a fixed order: presence of the required fields, the length
/// of `info_hash` and `peer_id`, numeric fields, `event`, then `port` (a zero
/// port is only accepted together with `event=stopped`).
pub fn decode(raw_query: &str, headers: &AnnounceHeaders, client_ip: IpAddr) -> Result<AnnounceRequest, TrackerError> {
    let query = parse_query(raw_query);

    for attribute in REQUIRED_FIELDS {
        if first_value(&query, attribute).is_none() {
            return Err(TrackerError::FieldMissing { attribute });
        }
    }

    let info_hash_raw = first_value(&query, "info_hash").unwrap_or_default();
    let info_hash = InfoHash::try_from(info_hash_raw).map_err(|_| TrackerError::FieldLengthInvalid {
        attribute: "info_hash",
        expected: HASH_LENGTH,
        actual: info_hash_raw.len(),
    })?;
    let peer_id_raw = first_value(&query, "peer_id").unwrap_or_default();
    let peer_id = PeerId::try_from(peer_id_raw).map_err(|_| TrackerError::FieldLengthInvalid {
        attribute: "peer_id",
        expected: HASH_LENGTH,
        actual: peer_id_raw.len(),
    })?;

    let uploaded = parse_unsigned(first_value(&query, "uploaded").unwrap_or_default(), "uploaded")?;
    let downloaded = parse_unsigned(first_value(&query, "downloaded").unwrap_or_default(), "downloaded")?;
    let left = parse_unsigned(first_value(&query, "left").unwrap_or_default(), "left")?;
    let numwant = optional_unsigned(&query, "numwant", DEFAULT_NUMWANT)?;
    let corrupt = optional_unsigned(&query, "corrupt", 0)?;

    let event_raw = first_value(&query, "event")
        .map(|value| String::from_utf8_lossy(value).to_lowercase())
        .unwrap_or_default();
    let event = event_raw.parse::<AnnounceEvent>()
        .map_err(|_| TrackerError::EventInvalid { event: event_raw.clone() })?;

    let port = parse_port(first_value(&query, "port").unwrap_or_default(), event)?;

    let key = first_value(&query, "key")
        .map(|value| String::from_utf8_lossy(value).into_owned())
        .unwrap_or_default();

    Ok(AnnounceRequest {
        info_hash,
        peer_id,
        port,
        uploaded,
        downloaded,
        left,
        event,
        numwant,
        corrupt,
        key,
        ip_address: client_ip,
        user_agent: headers.get("user-agent").cloned().unwrap_or_default(),
        received_at: Utc::now(),
    })
}

/// Packs one peer in compact form.
///
/// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are canonicalised first and
/// end up as IPv4 entries.
pub fn encode_compact_peer(ip: IpAddr, port: u16) -> CompactPeer {
    match ip.to_canonical() {
        IpAddr::V4(ipv4) => {
            let mut buffer = [0u8; COMPACT_PEER_V4_LENGTH];
            buffer[..4].copy_from_slice(&ipv4.octets());
            BigEndian::write_u16(&mut buffer[4..], port);
            CompactPeer::V4(buffer)
        }
        IpAddr::V6(ipv6) => {
            let mut buffer = [0u8; COMPACT_PEER_V6_LENGTH];
            buffer[..16].copy_from_slice(&ipv6.octets());
            BigEndian::write_u16(&mut buffer[16..], port);
            CompactPeer::V6(buffer)
        }
    }
}

fn bencode_integer(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Bencodes a response. Dictionary keys are emitted sorted, so equal
/// responses always produce identical bytes.
pub fn encode_response(response: &AnnounceResponse) -> Vec<u8> {
    match response {
        AnnounceResponse::Success { interval, min_interval, complete, incomplete, peers, peers6 } => {
            ben_map! {
                "interval" => ben_int!(bencode_integer(*interval)),
                "min interval" => ben_int!(bencode_integer(*min_interval)),
                "complete" => ben_int!(bencode_integer(*complete)),
                "incomplete" => ben_int!(bencode_integer(*incomplete)),
                "peers" => ben_bytes!(peers.as_slice()),
                "peers6" => ben_bytes!(peers6.as_slice())
            }.encode()
        }
        AnnounceResponse::Failure { reason, min_interval } => {
            ben_map! {
                "failure reason" => ben_bytes!(reason.as_str()),
                "min interval" => ben_int!(bencode_integer(*min_interval))
            }.encode()
        }
    }
}
