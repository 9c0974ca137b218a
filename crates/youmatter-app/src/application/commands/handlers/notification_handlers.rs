use crate::application::commands::engagement_commands::*;
use crate::application::dtos::NotificationDto;
use youmatter_domain::notification::Notification;
use youmatter_domain::shared::NotificationId;

ledger_handler!(
    AddNotificationCommandHandler,
    AddNotificationCommand,
    AddNotificationResult,
    |ledger, cmd| {
        let mut notification = Notification::new(cmd.kind, cmd.title, cmd.message);
        notification.action_url = cmd.action_url;
        let dto = NotificationDto::from(&notification);
        ledger.add_notification(notification)?;
        Ok(dto)
    }
);

ledger_handler!(
    MarkNotificationReadCommandHandler,
    MarkNotificationReadCommand,
    MarkNotificationReadResult,
    |ledger, cmd| {
        Ok(ledger.mark_notification_as_read(&NotificationId::from_string(&cmd.notification_id)))
    }
);

ledger_handler!(
    MarkAllNotificationsReadCommandHandler,
    MarkAllNotificationsReadCommand,
    MarkAllNotificationsReadResult,
    |ledger, _cmd| { Ok(ledger.mark_all_notifications_as_read()) }
);

ledger_handler!(
    RemoveNotificationCommandHandler,
    RemoveNotificationCommand,
    RemoveNotificationResult,
    |ledger, cmd| {
        Ok(ledger
            .remove_notification(&NotificationId::from_string(&cmd.notification_id))
            .is_some())
    }
);
