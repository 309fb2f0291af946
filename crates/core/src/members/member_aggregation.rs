//! Rebuilds nested members from the flat members-LEFT-JOIN-goals rows.
//!
//! Records live in an insertion-ordered arena (`Vec<Member>`) with a
//! `member id -> slot` index beside it. Rows for one member may arrive
//! interleaved with other members' rows; goals are appended in arrival order
//! and nothing is filtered or re-sorted.

use std::collections::HashMap;

use super::members_model::{Member, MemberGoalRow};

/// Members keyed by id, in the order their first row was seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembersById {
    members: Vec<Member>,
    index: HashMap<String, usize>,
}

impl MembersById {
    pub fn get(&self, member_id: &str) -> Option<&Member> {
        self.index.get(member_id).map(|&slot| &self.members[slot])
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    pub fn into_members(self) -> Vec<Member> {
        self.members
    }

    fn push_row(&mut self, row: MemberGoalRow) {
        let slot = match self.index.get(&row.member.id) {
            Some(&slot) => slot,
            None => {
                let slot = self.members.len();
                self.index.insert(row.member.id.clone(), slot);
                self.members.push(Member::from(row.member));
                slot
            }
        };

        if let Some(goal) = row.goal {
            self.members[slot].goals.push(goal);
        }
    }
}

impl FromIterator<MemberGoalRow> for MembersById {
    fn from_iter<I: IntoIterator<Item = MemberGoalRow>>(rows: I) -> Self {
        let mut aggregate = MembersById::default();
        for row in rows {
            aggregate.push_row(row);
        }
        aggregate
    }
}

/// Groups join rows into one `Member` per distinct id.
///
/// The member projection of the first row seen for an id is kept.
pub fn aggregate_members<I>(rows: I) -> MembersById
where
    I: IntoIterator<Item = MemberGoalRow>,
{
    rows.into_iter().collect()
}
