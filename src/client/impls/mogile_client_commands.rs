use crate::client::enums::client_error::ClientError;
use crate::client::structs::mogile_client::MogileClient;
use crate::protocol::protocol::{CMD_CREATE_CLOSE, CMD_CREATE_OPEN, CMD_DELETE, CMD_FILE_DEBUG, CMD_GET_PATHS, CMD_RENAME};
use crate::protocol::structs::query_values::QueryValues;

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

impl MogileClient {
    fn domain_args(&self) -> QueryValues {
        let mut args = QueryValues::new();
        args.set("domain", self.domain.as_str());
        args
    }

    /// Returns the URLs the file stored under `key` can be fetched from.
    pub fn get_paths(&mut self, key: &str, noverify: bool) -> Result<Vec<String>, ClientError> {
        let mut args = self.domain_args();
        args.set("key", key);
        args.set("noverify", flag(noverify));

        let reply = self.execute(CMD_GET_PATHS, &args)?;
        let count = match reply.get("paths") {
            None => 0,
            Some(count) => count.parse::<usize>().map_err(|_| {
                ClientError::PayloadParse(format!("invalid path count {:?}", count))
            })?,
        };

        Ok((1..=count)
            .filter_map(|index| reply.get(&format!("path{}", index)).map(str::to_string))
            .collect())
    }

    pub fn rename(&mut self, from_key: &str, to_key: &str) -> Result<(), ClientError> {
        let mut args = self.domain_args();
        args.set("from_key", from_key);
        args.set("to_key", to_key);
        self.execute(CMD_RENAME, &args).map(|_| ())
    }

    pub fn delete(&mut self, key: &str) -> Result<(), ClientError> {
        let mut args = self.domain_args();
        args.set("key", key);
        self.execute(CMD_DELETE, &args).map(|_| ())
    }

    pub fn file_debug(&mut self, key: &str) -> Result<QueryValues, ClientError> {
        let mut args = self.domain_args();
        args.set("key", key);
        self.execute(CMD_FILE_DEBUG, &args)
    }

    /// Asks the tracker where to upload a new file; the reply carries `fid`
    /// and the candidate `devid_N`/`path_N` pairs.
    pub fn create_open(&mut self, key: &str, class: &str, multi_dest: bool) -> Result<QueryValues, ClientError> {
        let mut args = self.domain_args();
        args.set("key", key);
        if !class.is_empty() {
            args.set("class", class);
        }
        args.set("multi_dest", flag(multi_dest));
        self.execute(CMD_CREATE_OPEN, &args)
    }

    pub fn create_close(&mut self, key: &str, fid: &str, devid: &str, path: &str, size: u64) -> Result<(), ClientError> {
        let mut args = self.domain_args();
        args.set("key", key);
        args.set("fid", fid);
        args.set("devid", devid);
        args.set("path", path);
        args.set("size", size.to_string());
        self.execute(CMD_CREATE_CLOSE, &args).map(|_| ())
    }
}
