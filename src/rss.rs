use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::content::{BlogEntry, CONTACT, PROFILE, SITE_URL};

pub fn build_channel(entries: &[BlogEntry]) -> Channel {
    let author = format!("{} ({})", CONTACT.email, PROFILE.name);
    let items = entries
        .iter()
        .map(|entry| {
            let guid = GuidBuilder::default()
                .value(entry.link)
                .permalink(true)
                .build();
            ItemBuilder::default()
                .title(entry.title.to_string())
                .author(author.clone())
                .pub_date(
                    entry
                        .published()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .map(|dt| dt.and_utc().to_rfc2822()),
                )
                .link(entry.link.to_string())
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(format!("{SITE_URL}/rss.xml"));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title(format!("{}'s Blog", PROFILE.name))
        .description(format!("Posts by {}", PROFILE.name))
        .link(format!("{SITE_URL}/#blog"))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BLOGS;

    #[test]
    fn test_one_item_per_entry() {
        let channel = build_channel(BLOGS);
        assert_eq!(channel.items().len(), BLOGS.len());
        assert_eq!(channel.title(), "Kajal Verma's Blog");

        let item = &channel.items()[0];
        assert_eq!(item.title(), Some(BLOGS[0].title));
        assert_eq!(item.link(), Some(BLOGS[0].link));
        assert_eq!(item.guid().map(|g| g.value()), Some(BLOGS[0].link));
        let pub_date = item.pub_date().unwrap_or_default();
        assert!(pub_date.starts_with("Sun,"), "{pub_date}");
        assert!(pub_date.contains("Jun 2025 00:00:00"), "{pub_date}");
    }

    #[test]
    fn test_self_link() {
        let channel = build_channel(&[]);
        assert!(channel.items().is_empty());
        let links = channel
            .atom_ext()
            .map(|ext| ext.links().to_vec())
            .unwrap_or_default();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].rel(), "self");
        assert!(links[0].href().ends_with("/rss.xml"));
    }
}
