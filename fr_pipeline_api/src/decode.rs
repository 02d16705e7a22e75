use crate::records::AdjacencyRecord;
use crate::UserId;

/// Why a raw input line could not be decoded into an [`AdjacencyRecord`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MalformedRecord {
    MissingOwner,
    InvalidOwner(String),
    InvalidFriend(String),
    UnexpectedToken(String),
}

impl std::fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MalformedRecord::MissingOwner => write!(f, "record has no owner token"),
            MalformedRecord::InvalidOwner(token) => {
                write!(f, "owner token '{}' is not a valid user id", token)
            }
            MalformedRecord::InvalidFriend(token) => {
                write!(f, "friend token '{}' is not a valid user id", token)
            }
            MalformedRecord::UnexpectedToken(token) => {
                write!(f, "unexpected trailing token '{}'", token)
            }
        }
    }
}

/// Decodes one raw adjacency line of the form
/// `<userId>[<ws><friendId>(,<friendId>)*]`, where `<ws>` is any run of
/// whitespace. A line with only the owner token yields an empty friend
/// list. All ids must be base-10 non-negative integers; anything after the
/// friend-list token makes the record malformed.
pub fn decode_adjacency(line: &str) -> Result<AdjacencyRecord, MalformedRecord> {
    let mut tokens = line.split_whitespace();
    let owner_token = tokens.next().ok_or(MalformedRecord::MissingOwner)?;
    let owner = owner_token
        .parse::<UserId>()
        .map_err(|_| MalformedRecord::InvalidOwner(owner_token.to_owned()))?;
    let friends = match tokens.next() {
        None => Vec::new(),
        Some(friend_list) => friend_list
            .split(',')
            .map(|token| {
                token
                    .parse::<UserId>()
                    .map_err(|_| MalformedRecord::InvalidFriend(token.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?,
    };
    if let Some(token) = tokens.next() {
        return Err(MalformedRecord::UnexpectedToken(token.to_owned()));
    }
    Ok(AdjacencyRecord::new(owner, friends))
}

#[cfg(test)]
mod tests {
    use crate::decode::{decode_adjacency, MalformedRecord};
    use crate::records::AdjacencyRecord;

    #[test]
    fn decodes_well_formed_lines() {
        let inputs = vec![
            ("0\t1,2,3", AdjacencyRecord::new(0, vec![1, 2, 3])),
            ("42 7", AdjacencyRecord::new(42, vec![7])),
            ("9", AdjacencyRecord::new(9, Vec::new())),
            ("9\t", AdjacencyRecord::new(9, Vec::new())),
            ("0  1,2", AdjacencyRecord::new(0, vec![1, 2])),
            ("007 001", AdjacencyRecord::new(7, vec![1])),
        ];
        for (index, (line, expected)) in inputs.into_iter().enumerate() {
            assert_eq!(decode_adjacency(line), Ok(expected), "Input {} failed", index);
        }
    }

    #[test]
    fn rejects_malformed_lines() {
        let inputs = vec![
            ("", MalformedRecord::MissingOwner),
            ("   ", MalformedRecord::MissingOwner),
            ("x\t1", MalformedRecord::InvalidOwner("x".to_owned())),
            ("-1\t2", MalformedRecord::InvalidOwner("-1".to_owned())),
            ("1\t2,x", MalformedRecord::InvalidFriend("x".to_owned())),
            ("1\t2,,3", MalformedRecord::InvalidFriend(String::new())),
            ("1\t2.5", MalformedRecord::InvalidFriend("2.5".to_owned())),
            ("1 2 3", MalformedRecord::UnexpectedToken("3".to_owned())),
        ];
        for (index, (line, expected)) in inputs.into_iter().enumerate() {
            assert_eq!(decode_adjacency(line), Err(expected), "Input {} failed", index);
        }
    }
}
