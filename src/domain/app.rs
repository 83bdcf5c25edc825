use crate::domain::utils::mutex::LockByMember;
use crate::ports::outbound::avatar_store::AvatarStore;

pub struct App<AS> {
    pub avatar_store: AS,
    pub guilds: Vec<u64>,
    pub(crate) members: LockByMember,
}

impl<AS> App<AS>
where
    AS: AvatarStore + Send + Sync,
{
    pub fn new(avatar_store: AS, guilds: Vec<u64>) -> Self {
        Self {
            avatar_store,
            guilds,
            members: LockByMember::new(),
        }
    }
}
